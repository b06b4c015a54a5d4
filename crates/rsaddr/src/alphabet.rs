//! Address alphabet and codeword assembly.
//!
//! The alphabet has 32 uppercase characters. The digits `0` and `1` and the
//! letters `I` and `O` are left out so that no two symbols look alike. A
//! character's position in the alphabet is its 5-bit symbol value.
//!
//! ```text
//! value:  0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 ... 31
//! char:   2 3 4 5 6 7 8 9 A B C  D  E  F  G  H  J  K  ... Z
//! ```
//!
//! Characters are written in display order, which is not codeword order.
//! The `i`-th valid character of an address lands in slot [`CODEWORD_MAP`]`[i]`.
//!
//! # Example
//!
//! ```
//! use rsaddr::alphabet::{Codeword, Symbol};
//!
//! assert_eq!(Symbol::from_char('K').map(Symbol::value), Some(17));
//! assert!(Symbol::from_char('O').is_none());
//!
//! let cw = Codeword::map("2223-2222-KB8Y-22222").unwrap();
//! assert_eq!(cw.get(0).value(), 1);
//! ```

use crate::CODEWORD_LEN;
use core::fmt;

/// The 32 address characters, indexed by symbol value.
pub const ALPHABET: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Codeword slot for the `i`-th valid character of an address.
///
/// The first eight characters are the low data digits in reversed groups of
/// four, followed by the high digits and the parity symbols interleaved.
pub const CODEWORD_MAP: [usize; CODEWORD_LEN] =
    [3, 2, 1, 0, 7, 6, 5, 4, 13, 14, 15, 16, 12, 8, 9, 10, 11];

/// Reverse lookup from ASCII byte to symbol value; `INVALID` marks bytes
/// outside the alphabet.
const REVERSE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

const INVALID: u8 = 0xFF;

/// One 5-bit address symbol.
///
/// # Example
///
/// ```
/// use rsaddr::alphabet::Symbol;
///
/// let s = Symbol::new(17);
/// assert_eq!(s.value(), 17);
/// assert_eq!(s.character(), 'K');
/// assert_eq!(s.to_string(), "K");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Symbol(u8);

impl Symbol {
    /// Symbol value 0, rendered as `2`.
    pub const ZERO: Self = Self(0);

    /// Symbol value 31, rendered as `Z`.
    pub const MAX: Self = Self(31);

    /// Creates a symbol from its value. Only the low five bits are kept.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value & 0x1F)
    }

    /// Looks up an address character.
    ///
    /// Returns `None` for anything outside the alphabet, including lowercase
    /// letters: matching is exact.
    ///
    /// # Example
    ///
    /// ```
    /// use rsaddr::alphabet::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('2'), Some(Symbol::ZERO));
    /// assert_eq!(Symbol::from_char('Z'), Some(Symbol::MAX));
    /// assert_eq!(Symbol::from_char('z'), None);
    /// assert_eq!(Symbol::from_char('-'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        let cp = c as u32;
        if cp >= 128 {
            return None;
        }
        match REVERSE[cp as usize] {
            INVALID => None,
            v => Some(Self(v)),
        }
    }

    /// Returns the symbol value (0-31).
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the alphabet character for this symbol.
    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        ALPHABET[self.0 as usize] as char
    }
}

impl From<Symbol> for u8 {
    #[inline]
    fn from(symbol: Symbol) -> Self {
        symbol.value()
    }
}

impl From<Symbol> for char {
    #[inline]
    fn from(symbol: Symbol) -> Self {
        symbol.character()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}, {})", self.0, self.character())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character())
    }
}

/// Iterates the valid symbols of `text` in input order, skipping everything
/// else.
///
/// # Example
///
/// ```
/// use rsaddr::alphabet::symbols;
///
/// let values: Vec<u8> = symbols("2-3 z4").map(|s| s.value()).collect();
/// assert_eq!(values, vec![0, 1, 2]);
/// ```
pub fn symbols(text: &str) -> impl Iterator<Item = Symbol> + '_ {
    text.chars().filter_map(Symbol::from_char)
}

/// Counts the valid symbols in `text`.
#[must_use]
pub fn count_symbols(text: &str) -> usize {
    symbols(text).count()
}

/// Number of valid symbols found when an input did not hold exactly
/// [`CODEWORD_LEN`] of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCount {
    /// How many alphabet characters the input contained.
    pub found: usize,
}

impl fmt::Display for SymbolCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} address symbols, found {}",
            CODEWORD_LEN, self.found
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SymbolCount {}

/// Seventeen symbols in canonical (codeword) order.
///
/// Slots `0..13` hold the identifier's base-32 digits, least significant
/// first. Slots `13..17` hold parity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword([Symbol; CODEWORD_LEN]);

impl Codeword {
    /// Builds a codeword from address text.
    ///
    /// # Errors
    ///
    /// Returns the symbol count if `text` does not contain exactly
    /// [`CODEWORD_LEN`] alphabet characters. Nothing is placed in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use rsaddr::alphabet::Codeword;
    ///
    /// assert!(Codeword::map("2222-2222-2222-22222").is_ok());
    /// assert_eq!(Codeword::map("2222-2222").unwrap_err().found, 8);
    /// ```
    pub fn map(text: &str) -> Result<Self, SymbolCount> {
        let found = count_symbols(text);
        if found != CODEWORD_LEN {
            return Err(SymbolCount { found });
        }
        let mut slots = [Symbol::ZERO; CODEWORD_LEN];
        for (slot, symbol) in CODEWORD_MAP.iter().zip(symbols(text)) {
            slots[*slot] = symbol;
        }
        Ok(Self(slots))
    }

    /// Wraps symbol values that are already in canonical order.
    ///
    /// Values are truncated to five bits.
    #[must_use]
    pub const fn from_values(values: [u8; CODEWORD_LEN]) -> Self {
        let mut slots = [Symbol::ZERO; CODEWORD_LEN];
        let mut i = 0;
        while i < CODEWORD_LEN {
            slots[i] = Symbol::new(values[i]);
            i += 1;
        }
        Self(slots)
    }

    /// Returns the symbol in canonical slot `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 17`.
    #[inline]
    #[must_use]
    pub const fn get(&self, pos: usize) -> Symbol {
        self.0[pos]
    }

    /// Returns the symbol values in canonical order.
    #[must_use]
    pub fn values(&self) -> [u8; CODEWORD_LEN] {
        self.0.map(Symbol::value)
    }

    /// The thirteen identifier digits, least significant first.
    #[must_use]
    pub fn data(&self) -> &[Symbol] {
        &self.0[..crate::DATA_LEN]
    }

    /// Renders the codeword back into display order without separators.
    #[must_use]
    pub fn to_display_string(&self) -> alloc::string::String {
        CODEWORD_MAP
            .iter()
            .map(|&slot| self.0[slot].character())
            .collect()
    }
}

impl fmt::Debug for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codeword({:?})", self.values())
    }
}
