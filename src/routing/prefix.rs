//! CIDR prefixes (`network/length`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::address::{Address, AddressError};
use crate::routing::matcher::mask;

/// Longest valid IPv4 prefix length.
pub const MAX_PREFIX_LEN: u8 = 32;

/// Errors produced when building or parsing a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    #[error("prefix {0:?} has no '/length' part")]
    MissingLength(String),

    #[error("invalid network address: {0}")]
    Network(#[from] AddressError),

    #[error("prefix length {0:?} is not a decimal integer")]
    InvalidLength(String),

    #[error("prefix length {0} exceeds 32")]
    LengthOutOfRange(u32),
}

/// A network address paired with a prefix length.
///
/// The network is stored as given. Host bits beyond `length` may be set;
/// matching always masks them off, and [`Prefix::canonical`] clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    network: Address,
    length: u8,
}

impl Prefix {
    pub fn new(network: Address, length: u8) -> Result<Self, PrefixError> {
        if length > MAX_PREFIX_LEN {
            return Err(PrefixError::LengthOutOfRange(u32::from(length)));
        }
        Ok(Self { network, length })
    }

    /// The default route, `0.0.0.0/0`.
    pub const fn default_route() -> Self {
        Self {
            network: Address::UNSPECIFIED,
            length: 0,
        }
    }

    pub fn network(&self) -> Address {
        self.network
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    /// Same prefix with every bit beyond `length` cleared.
    pub fn canonical(&self) -> Self {
        Self {
            network: Address::from_bits(self.network.to_bits() & mask(self.length)),
            length: self.length,
        }
    }

    pub fn is_canonical(&self) -> bool {
        *self == self.canonical()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.length)
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (network, length) = s
            .split_once('/')
            .ok_or_else(|| PrefixError::MissingLength(s.to_string()))?;

        let network = Address::parse(network)?;

        if length.is_empty() || !length.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrefixError::InvalidLength(length.to_string()));
        }
        let length: u32 = length
            .parse()
            .map_err(|_| PrefixError::InvalidLength(length.to_string()))?;
        let length = u8::try_from(length)
            .ok()
            .filter(|l| *l <= MAX_PREFIX_LEN)
            .ok_or(PrefixError::LengthOutOfRange(length))?;

        Self::new(network, length)
    }
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
