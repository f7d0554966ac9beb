//! Crate root module declarations for the Sentinel chess engine.
//!
//! Exposes the board model, move generation with incremental attack
//! tracking, search, engines, and notation helpers so the binary, benches,
//! and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod edge_distances;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod attack_tracker;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliding;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_ordering;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
