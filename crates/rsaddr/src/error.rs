//! Address decoding errors.

use alloc::string::String;
use core::fmt;

/// Why an address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// The input does not hold exactly 17 alphabet characters. Both missing
    /// and surplus symbols land here.
    TooShort {
        /// Alphabet characters present.
        found: usize,
    },
    /// At least one syndrome is nonzero.
    ChecksumInvalid,
    /// The checksum holds but the value does not fit in 64 bits.
    Overflow,
}

impl DecodeErrorKind {
    /// Stable snake_case name, used in vector files and reports.
    ///
    /// # Example
    ///
    /// ```
    /// use rsaddr::DecodeErrorKind;
    ///
    /// assert_eq!(DecodeErrorKind::ChecksumInvalid.name(), "checksum_invalid");
    /// assert_eq!(DecodeErrorKind::TooShort { found: 3 }.name(), "too_short");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::ChecksumInvalid => "checksum_invalid",
            Self::Overflow => "overflow",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { found } => {
                write!(f, "expected {} symbols, found {}", crate::CODEWORD_LEN, found)
            }
            Self::ChecksumInvalid => write!(f, "checksum mismatch"),
            Self::Overflow => write!(f, "value exceeds 64 bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeErrorKind {}

/// A rejected address together with where it came from.
///
/// The `Display` form is the diagnostic shown to users:
///
/// ```text
/// At line: {line}. Error decoding address: S-{text}
/// ```
///
/// `text` is the address as the caller passed it, separators and all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDecodeError {
    kind: DecodeErrorKind,
    line: usize,
    text: String,
}

impl AddressDecodeError {
    /// Attaches source context to a decode failure.
    #[must_use]
    pub fn new(kind: DecodeErrorKind, line: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }

    /// The failure cause.
    #[must_use]
    pub const fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// The caller-supplied source line.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The unfiltered address text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for AddressDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At line: {}. Error decoding address: S-{}",
            self.line, self.text
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
