//! GF(32) arithmetic for the address checksum.
//!
//! Field elements are 5-bit values. Addition is XOR. Multiplication goes
//! through log/antilog tables built from the generator `α = 2` modulo the
//! primitive polynomial x⁵ + x² + 1 (`0b100101`).
//!
//! # Tables
//!
//! ```text
//! GEXP[n] = αⁿ            n = 0..31, GEXP[31] = GEXP[0] = 1
//! GLOG[a] = log_α(a)      a = 1..31, GLOG[0] is a placeholder
//! ```
//!
//! Both tables are evaluated at compile time and live in read-only memory.
//!
//! # Example
//!
//! ```
//! use rsaddr::gf32;
//!
//! // α⁵ = α² + 1
//! assert_eq!(gf32::exp(5), 0b00101);
//! assert_eq!(gf32::mul(16, 2), 5);
//! assert_eq!(gf32::mul(0, 17), 0);
//! ```

/// Order of the multiplicative group.
pub const ORDER: usize = 31;

/// x⁵ + x² + 1.
const PRIMITIVE: u8 = 0b10_0101;

/// Powers of the generator. `GEXP[31]` wraps back to 1.
pub const GEXP: [u8; 32] = {
    let mut table = [0u8; 32];
    let mut x: u8 = 1;
    let mut n = 0;
    while n < 32 {
        table[n] = x;
        x <<= 1;
        if x & 0x20 != 0 {
            x ^= PRIMITIVE;
        }
        n += 1;
    }
    table
};

/// Discrete logarithms. Index 0 has no logarithm and holds 0.
pub const GLOG: [u8; 32] = {
    let mut table = [0u8; 32];
    let mut n = 0;
    while n < ORDER {
        table[GEXP[n] as usize] = n as u8;
        n += 1;
    }
    table
};

/// Field addition (and subtraction).
#[inline]
#[must_use]
pub const fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication by table lookup.
///
/// Zero absorbs: `mul(0, b) == mul(a, 0) == 0`.
///
/// # Example
///
/// ```
/// use rsaddr::gf32;
///
/// assert_eq!(gf32::mul(1, 23), 23);
/// assert_eq!(gf32::mul(2, 2), 4);
/// assert_eq!(gf32::mul(31, 31), 18);
/// ```
#[inline]
#[must_use]
pub const fn mul(a: u8, b: u8) -> u8 {
    let (a, b) = (a & 0x1F, b & 0x1F);
    if a == 0 || b == 0 {
        return 0;
    }
    GEXP[(GLOG[a as usize] as usize + GLOG[b as usize] as usize) % ORDER]
}

/// `αⁿ`, with `n` reduced modulo 31.
#[inline]
#[must_use]
pub const fn exp(n: usize) -> u8 {
    GEXP[n % ORDER]
}

/// Discrete logarithm of a nonzero element.
///
/// Returns `None` for 0.
#[inline]
#[must_use]
pub const fn log(a: u8) -> Option<u8> {
    if a & 0x1F == 0 {
        None
    } else {
        Some(GLOG[(a & 0x1F) as usize])
    }
}

/// The antilog table as published with the address format, written out
/// literally so the derived [`GEXP`] can be checked against it.
#[doc(hidden)]
pub const PUBLISHED_GEXP: [u8; 32] = [
    1, 2, 4, 8, 16, 5, 10, 20, 13, 26, 17, 7, 14, 28, 29, 31, 27, 19, 3, 6, 12, 24, 21, 15, 30,
    25, 23, 11, 22, 9, 18, 1,
];

/// The published log table; the counterpart of [`PUBLISHED_GEXP`].
#[doc(hidden)]
pub const PUBLISHED_GLOG: [u8; 32] = [
    0, 0, 1, 18, 2, 5, 19, 11, 3, 29, 6, 27, 20, 8, 12, 23, 4, 10, 30, 17, 7, 22, 28, 26, 21, 25,
    9, 16, 13, 14, 24, 15,
];
