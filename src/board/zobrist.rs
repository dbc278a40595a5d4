//! Zobrist codes for incremental position hashing.
//!
//! One 63-bit code per (point, color) over the largest supported board.
//! The table is generated once from a fixed seed, so every board in the
//! process (and every run of the program) hashes positions identically.

use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

use crate::core::{Player, PlayerPair, Point, MAX_BOARD_SIZE};

/// Hash of a board with no stones.
pub const EMPTY_BOARD: u64 = 0;

const MAX63: u64 = 0x7fff_ffff_ffff_ffff;

const TABLE_SEED: u64 = 0;

const EXTENT: usize = MAX_BOARD_SIZE as usize;

static TABLE: Lazy<Vec<PlayerPair<u64>>> = Lazy::new(generate);

fn generate() -> Vec<PlayerPair<u64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(TABLE_SEED);
    let mut seen = FxHashSet::default();
    let mut next_code = || loop {
        let code = rng.gen_range(1..=MAX63);
        if seen.insert(code) {
            return code;
        }
    };

    (0..EXTENT * EXTENT)
        .map(|_| {
            let black = next_code();
            let white = next_code();
            PlayerPair::new(black, white)
        })
        .collect()
}

/// The code for `player`'s stone sitting on `point`.
#[inline]
#[must_use]
pub fn hash_code(point: Point, player: Player) -> u64 {
    debug_assert!(point.is_within(MAX_BOARD_SIZE, MAX_BOARD_SIZE));
    let idx = (point.row as usize - 1) * EXTENT + (point.col as usize - 1);
    TABLE[idx][player]
}
