//! Syndrome check over a 17-symbol codeword.
//!
//! The codeword is a (31, 13) Reed-Solomon codeword over GF(32) with the
//! fourteen positions `13..=26` fixed at zero and left out of storage. Only
//! positions `0..=12` (data) and `27..=30` (parity) are kept, packed into
//! slots `0..=16`:
//!
//! ```text
//! position j : 0 1 ... 12 | 13 ... 26 | 27 28 29 30
//! slot       : 0 1 ... 12 | (absent)  | 13 14 15 16
//! ```
//!
//! Syndrome `i` (for `i = 1..=4`) evaluates the codeword polynomial at `αⁱ`:
//!
//! ```text
//! S_i = Σ_j c_j · α^(i·j)
//! ```
//!
//! A codeword is accepted when all four syndromes are zero. The code has
//! minimum distance 5, so any single substituted symbol is caught. It is a
//! transcription check, not an authenticator: a deliberate multi-symbol
//! edit can still satisfy it.

use crate::alphabet::Codeword;
use crate::{gf32, PARITY_LEN};

/// Positions of the full-length code that are stored in a codeword, paired
/// with the slot that holds them.
///
/// # Example
///
/// ```
/// use rsaddr::checksum::evaluation_points;
///
/// let points: Vec<(usize, usize)> = evaluation_points().collect();
/// assert_eq!(points.len(), 17);
/// assert_eq!(points[12], (12, 12));
/// assert_eq!(points[13], (27, 13));
/// ```
pub fn evaluation_points() -> impl Iterator<Item = (usize, usize)> {
    (0..gf32::ORDER)
        .filter(|j| !(13..=26).contains(j))
        .map(|j| (j, if j > 26 { j - 14 } else { j }))
}

/// Computes syndrome `i` of `codeword`.
///
/// `i` ranges over `1..=4` in the acceptance check; other values are
/// evaluated the same way.
#[must_use]
pub fn syndrome(codeword: &Codeword, i: usize) -> u8 {
    evaluation_points().fold(0, |t, (j, pos)| {
        gf32::add(t, gf32::mul(codeword.get(pos).value(), gf32::exp(i * j)))
    })
}

/// Computes the four check syndromes, `S_1` through `S_4`.
///
/// # Example
///
/// ```
/// use rsaddr::alphabet::Codeword;
/// use rsaddr::checksum::syndromes;
///
/// let cw = Codeword::map("K37B-9V85-FB95-793HN").unwrap();
/// assert_eq!(syndromes(&cw), [0, 0, 0, 0]);
/// ```
#[must_use]
pub fn syndromes(codeword: &Codeword) -> [u8; PARITY_LEN] {
    core::array::from_fn(|k| syndrome(codeword, k + 1))
}

/// Returns true if every syndrome vanishes.
#[must_use]
pub fn is_valid(codeword: &Codeword) -> bool {
    syndromes(codeword).iter().fold(0, |acc, s| acc | s) == 0
}
