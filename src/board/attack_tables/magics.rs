//! Magic bitboard tables for sliding piece attacks.
//!
//! Each square gets a relevance mask (the squares whose occupancy can change
//! the attack set, edges excluded), a table of attack sets for every
//! occupancy subset of that mask, and a multiplicative constant that maps a
//! masked occupancy to its table index:
//!
//! ```text
//! index = (occupancy & mask).wrapping_mul(magic) >> (64 - mask_bits)
//! ```
//!
//! The constants are found by a randomized retry loop at first use; the
//! resulting tables are immutable and shared for the rest of the process.

use std::time::Instant;

use once_cell::sync::Lazy;
use rand::prelude::*;

const BISHOP_DELTAS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DELTAS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Seed for the magic search; fixed so table construction is reproducible.
const MAGIC_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

pub(crate) struct SquareMagic {
    mask: u64,
    magic: u64,
    shift: u32,
    attacks: Vec<u64>,
}

impl SquareMagic {
    #[inline]
    fn lookup(&self, occupancy: u64) -> u64 {
        let index = (occupancy & self.mask).wrapping_mul(self.magic) >> self.shift;
        self.attacks[index as usize]
    }
}

pub(crate) static BISHOP_MAGICS: Lazy<[SquareMagic; 64]> =
    Lazy::new(|| build_magics(&BISHOP_DELTAS, "bishop"));

pub(crate) static ROOK_MAGICS: Lazy<[SquareMagic; 64]> =
    Lazy::new(|| build_magics(&ROOK_DELTAS, "rook"));

/// Bishop attacks from `sq` under `occupancy`, via table lookup.
#[inline]
pub(crate) fn bishop_attacks(sq: usize, occupancy: u64) -> u64 {
    BISHOP_MAGICS[sq].lookup(occupancy)
}

/// Rook attacks from `sq` under `occupancy`, via table lookup.
#[inline]
pub(crate) fn rook_attacks(sq: usize, occupancy: u64) -> u64 {
    ROOK_MAGICS[sq].lookup(occupancy)
}

/// Walk each ray from `sq`, including the first occupied square and stopping
/// there. Ground truth for the magic tables.
fn ray_attacks(sq: usize, occupancy: u64, deltas: &[(isize, isize); 4]) -> u64 {
    let rank = (sq / 8) as isize;
    let file = (sq % 8) as isize;
    let mut attacks = 0u64;
    for &(dr, df) in deltas {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Relevance mask for `sq`: every square a ray passes over, excluding the
/// last square of each ray (a blocker there changes nothing).
fn relevance_mask(sq: usize, deltas: &[(isize, isize); 4]) -> u64 {
    let rank = (sq / 8) as isize;
    let file = (sq % 8) as isize;
    let mut mask = 0u64;
    for &(dr, df) in deltas {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Enumerate every subset of `mask` with the carry-rippler, pairing each with
/// its ray-cast attack set.
fn occupancy_subsets(sq: usize, mask: u64, deltas: &[(isize, isize); 4]) -> Vec<(u64, u64)> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push((subset, ray_attacks(sq, subset, deltas)));
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

/// Find a collision-free magic for one square by randomized retry.
///
/// Candidates are the AND of three random draws, biasing toward sparse bit
/// patterns. There is no retry cap; termination is probabilistic and fast for
/// the mask sizes involved (at most 12 relevant bits).
fn find_magic(subsets: &[(u64, u64)], shift: u32, rng: &mut StdRng) -> (u64, Vec<u64>) {
    let size = subsets.len();
    let mut attempts = 0u64;
    loop {
        let magic = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        attempts += 1;
        if attempts % 1_000_000 == 0 {
            log::debug!("magic search still running after {attempts} candidates");
        }

        let mut table = vec![0u64; size];
        let mut used = vec![false; size];
        let mut collided = false;
        for &(occupancy, attacks) in subsets {
            let index = (occupancy.wrapping_mul(magic) >> shift) as usize;
            if used[index] && table[index] != attacks {
                collided = true;
                break;
            }
            used[index] = true;
            table[index] = attacks;
        }
        if !collided {
            return (magic, table);
        }
    }
}

fn build_magics(deltas: &[(isize, isize); 4], label: &str) -> [SquareMagic; 64] {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
    let magics: Vec<SquareMagic> = (0..64)
        .map(|sq| {
            let mask = relevance_mask(sq, deltas);
            let shift = 64 - mask.count_ones();
            let subsets = occupancy_subsets(sq, mask, deltas);
            let (magic, attacks) = find_magic(&subsets, shift, &mut rng);
            SquareMagic {
                mask,
                magic,
                shift,
                attacks,
            }
        })
        .collect();
    log::debug!("built {label} magic tables in {:?}", start.elapsed());
    magics
        .try_into()
        .unwrap_or_else(|_| unreachable!("exactly 64 squares"))
}
