//! 64-bit account identifiers.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// A decoded account identifier.
///
/// `Display` renders the decimal form; `{:x}` and [`AccountId::to_hex`]
/// render the 16-digit big-endian hexadecimal form returned by
/// [`decode_address`](crate::decode_address).
///
/// # Example
///
/// ```
/// use rsaddr::AccountId;
///
/// let id = AccountId::new(6502115112683865257);
/// assert_eq!(id.to_hex(), "5a3c273ecc3884a9");
/// assert_eq!(id.to_string(), "6502115112683865257");
/// assert_eq!("6502115112683865257".parse::<AccountId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct AccountId(u64);

impl AccountId {
    /// Wraps a raw identifier.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Sixteen lowercase hex digits, most significant first.
    #[must_use]
    pub fn to_hex(self) -> String {
        alloc::format!("{:016x}", self.0)
    }
}

impl From<u64> for AccountId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<AccountId> for u64 {
    #[inline]
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Error when parsing a decimal account identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAccountIdError {
    input: String,
}

impl fmt::Display for ParseAccountIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid account id '{}'", self.input)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseAccountIdError {}

impl FromStr for AccountId {
    type Err = ParseAccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseAccountIdError {
                input: String::from(s),
            })
    }
}
