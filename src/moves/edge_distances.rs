//! Precomputed board geometry for the mailbox generators.
//!
//! Direction order is N, E, S, W, NE, SE, SW, NW. North points toward
//! rank 8, which is row 0 in this engine's square numbering.

pub const NORTH: usize = 0;
pub const EAST: usize = 1;
pub const SOUTH: usize = 2;
pub const WEST: usize = 3;
pub const NORTH_EAST: usize = 4;
pub const SOUTH_EAST: usize = 5;
pub const SOUTH_WEST: usize = 6;
pub const NORTH_WEST: usize = 7;

pub const DIRECTION_OFFSETS: [i8; 8] = [-8, 1, 8, -1, -7, 9, 7, -9];

pub const NUM_SQUARES_TO_EDGE: [[u8; 8]; 64] = generate_edge_distances();

const fn generate_edge_distances() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as u8;
        let col = (sq % 8) as u8;

        let north = row;
        let east = 7 - col;
        let south = 7 - row;
        let west = col;

        table[sq] = [
            north,
            east,
            south,
            west,
            min(north, east),
            min(east, south),
            min(south, west),
            min(west, north),
        ];
        sq += 1;
    }

    table
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

/// Square reached after `steps` steps from `square` in `direction`.
///
/// Callers must bound `steps` by `NUM_SQUARES_TO_EDGE`.
#[inline]
pub const fn step(square: u8, direction: usize, steps: u8) -> u8 {
    (square as i16 + DIRECTION_OFFSETS[direction] as i16 * steps as i16) as u8
}
