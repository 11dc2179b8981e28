//! Dotted-quad parsing and formatting.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Longest accepted octet group, leading zeros included.
const MAX_GROUP_DIGITS: usize = 3;

/// An IPv4 host address stored as a 32-bit value (first octet in the high byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(u32);

impl Address {
    /// The all-zero address, `0.0.0.0`.
    pub const UNSPECIFIED: Address = Address(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parse dotted-quad text.
    ///
    /// Accepts exactly four `.`-separated groups of one to three ASCII
    /// digits, each in `0..=255`. Anything else is an [`AddressError::InvalidFormat`].
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let invalid = |kind| AddressError::InvalidFormat {
            input: text.to_string(),
            kind,
        };

        if text.chars().any(char::is_whitespace) {
            return Err(invalid(FormatErrorKind::Whitespace));
        }

        let groups: Vec<&str> = text.split('.').collect();
        if groups.len() != 4 {
            return Err(invalid(FormatErrorKind::GroupCount));
        }

        let mut bits = 0u32;
        for group in groups {
            if group.is_empty()
                || group.len() > MAX_GROUP_DIGITS
                || !group.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid(FormatErrorKind::NotDecimal));
            }
            // At most three digits, so this cannot overflow.
            let value: u32 = group
                .parse()
                .map_err(|_| invalid(FormatErrorKind::NotDecimal))?;
            if value > u32::from(u8::MAX) {
                return Err(invalid(FormatErrorKind::OutOfRange));
            }
            bits = (bits << 8) | value;
        }

        Ok(Self(bits))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// What was wrong with a malformed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatErrorKind {
    /// Text contains whitespace.
    Whitespace,
    /// Not exactly four dot-separated groups.
    GroupCount,
    /// A group is empty, longer than three digits, or contains a non-digit.
    NotDecimal,
    /// A group is larger than 255.
    OutOfRange,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FormatErrorKind::Whitespace => "whitespace is not allowed",
            FormatErrorKind::GroupCount => "expected exactly four dot-separated groups",
            FormatErrorKind::NotDecimal => "every group must be a decimal integer of 1 to 3 digits",
            FormatErrorKind::OutOfRange => "every group must be between 0 and 255",
        };
        f.write_str(msg)
    }
}

/// Address parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid IPv4 address {input:?}: {kind}")]
    InvalidFormat { input: String, kind: FormatErrorKind },
}

impl AddressError {
    pub fn kind(&self) -> FormatErrorKind {
        match self {
            AddressError::InvalidFormat { kind, .. } => *kind,
        }
    }
}
