use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use sentinel_chess::engines::engine_alpha_beta::AlphaBetaEngine;
use sentinel_chess::engines::engine_random::RandomEngine;
use sentinel_chess::engines::engine_trait::Engine;
use sentinel_chess::errors::{ChessError, ChessResult};
use sentinel_chess::game_state::chess_rules::{CastlingRule, STARTING_POSITION_FEN};
use sentinel_chess::game_state::chess_types::*;
use sentinel_chess::move_generation::legal_move_generator::FastLegalMoveGenerator;
use sentinel_chess::move_generation::perft::perft_divide;
use sentinel_chess::utils::long_algebraic::{apply_long_algebraic, move_to_long_algebraic};
use sentinel_chess::utils::render_game_state::{render_board, render_board_with_attacks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    AlphaBeta,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "sentinel_chess")]
#[command(about = "Play chess against a fixed-depth alpha-beta engine in the terminal")]
struct Args {
    /// Starting position as FEN
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Search depth in plies for the alpha-beta opponent
    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Color the human plays
    #[arg(long, value_enum, default_value_t = Side::White)]
    play_as: Side,

    /// Computer opponent
    #[arg(long, value_enum, default_value_t = Opponent::AlphaBeta)]
    opponent: Opponent,

    /// Forbid castling out of, through, or into check
    #[arg(long)]
    strict_castling: bool,

    /// Print per-move perft counts to this depth and exit
    #[arg(long)]
    perft: Option<u8>,
}

enum Command {
    Quit,
    Continue,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    if args.depth < 1 {
        return Err("--depth must be >= 1".into());
    }

    let mut board = Board::from_fen(&args.fen)?;
    if args.strict_castling {
        board = board.with_castling_rule(CastlingRule::Strict);
    }

    if let Some(depth) = args.perft {
        return run_perft_divide(&mut board, depth);
    }

    let mut engine: Box<dyn Engine> = match args.opponent {
        Opponent::AlphaBeta => Box::new(AlphaBetaEngine::with_depth(args.depth)),
        Opponent::Random => Box::new(RandomEngine::new()),
    };
    let human = Color::from(args.play_as);
    info!("{} plays {:?}", engine.name(), human.opposite());

    println!("{}", render_board(&board));
    println!("Enter moves like e2e4 or e7e8q. Commands: undo, board, moves, quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match board.status()? {
            GameStatus::Checkmate { loser } => {
                println!("Checkmate. {:?} wins.", loser.opposite());
                break;
            }
            GameStatus::Stalemate => {
                println!("Stalemate.");
                break;
            }
            GameStatus::InProgress => {}
        }

        if board.side_to_move() != human {
            play_engine_move(&mut board, engine.as_mut())?;
            continue;
        }

        print!("{:?} to move> ", human);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if let Command::Quit = handle_input(&mut board, line?.trim(), human)? {
            break;
        }
    }

    Ok(())
}

fn run_perft_divide(board: &mut Board, depth: u8) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let divided = perft_divide(&FastLegalMoveGenerator, board, depth)?;
    let mut total = 0usize;
    for (mv, nodes) in &divided {
        println!("{}: {nodes}", move_to_long_algebraic(*mv)?);
        total += nodes;
    }
    println!("\nNodes searched: {total}");
    info!("perft depth {depth} took {:?}", start.elapsed());
    Ok(())
}

fn play_engine_move(board: &mut Board, engine: &mut dyn Engine) -> ChessResult<()> {
    let out = engine.choose_move(board)?;
    for line in &out.info_lines {
        info!("{line}");
    }

    if let Some(mv) = out.best_move {
        board.make_move(mv)?;
        println!("{} plays {}", engine.name(), move_to_long_algebraic(mv)?);
        println!("{}", render_board(board));
    }
    Ok(())
}

fn handle_input(board: &mut Board, input: &str, human: Color) -> ChessResult<Command> {
    match input {
        "" => {}
        "quit" | "exit" => return Ok(Command::Quit),
        "board" => {
            println!("{}", render_board_with_attacks(board, human.opposite()));
            println!("{}", board.to_fen());
            if let Some(mv) = board.last_move() {
                println!("Last move: {}", move_to_long_algebraic(mv)?);
            }
        }
        "moves" => {
            let moves = board
                .legal_moves(human)?
                .into_iter()
                .map(move_to_long_algebraic)
                .collect::<ChessResult<Vec<_>>>()?;
            println!("{}", moves.join(" "));
        }
        "undo" => {
            // Take back the engine reply and the human move before it.
            let plies = board.history_len().min(2);
            if plies == 0 {
                println!("Nothing to undo.");
            }
            for _ in 0..plies {
                board.unmake_move()?;
            }
            println!("{}", render_board(board));
        }
        text => match apply_long_algebraic(board, text) {
            Ok(_) => println!("{}", render_board(board)),
            Err(err @ (ChessError::InvalidAlgebraic(_) | ChessError::IllegalMove(_))) => {
                warn!("rejected input {text:?}: {err}");
                println!("{err}");
            }
            Err(err) => return Err(err),
        },
    }

    Ok(Command::Continue)
}
