use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sentinel_chess::game_state::chess_types::Board;
use sentinel_chess::move_generation::legal_move_generator::{
    FastLegalMoveGenerator, LegalMoveGenerator,
};
use sentinel_chess::move_generation::move_generator::MoveGenerator;
use sentinel_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Depths stop before en passant or castling through check would make the
// counts diverge from the published tables.
const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191],
    },
    BenchCase {
        name: "position_5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_nodes: &[44, 1486],
    },
];

const CASES_STANDARD: &[BenchCase] = &[BenchCase {
    name: "position_1",
    fen: STARTPOS_FEN,
    expected_nodes: &[20, 400, 8902, 197_281],
}];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("SENTINEL_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_generator<G: MoveGenerator>(c: &mut Criterion, label: &str, generator: &G) {
    let mut group = c.benchmark_group(format!("perft_{label}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = Board::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;
            let mut bench_board = board.clone();

            // Correctness guard before benchmarking.
            let warmup = perft(generator, &mut bench_board, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(generator, black_box(&mut bench_board), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    bench_generator(c, "attack_map", &FastLegalMoveGenerator);
    bench_generator(c, "reply_scan", &LegalMoveGenerator);
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
