use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A positive integer, candidate for decoding or result of encoding.
///
/// Positivity is checked on construction so the decoder only ever sees values
/// of its domain. Whether the value actually encodes a formula is only known
/// after decoding it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BigUint", into = "BigUint"))]
pub struct GodelNumber(BigUint);

impl GodelNumber {
    /// Gödel number of the empty formula.
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    pub fn new(value: BigUint) -> Result<Self> {
        if value.is_zero() {
            return Err(Error::InvalidGodelNumber {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Wrap a value known to be positive.
    pub(crate) fn from_positive(value: BigUint) -> Self {
        debug_assert!(!value.is_zero());
        Self(value)
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Number of decimal digits.
    pub fn digits(&self) -> usize {
        self.0.to_str_radix(10).len()
    }
}

impl TryFrom<BigUint> for GodelNumber {
    type Error = Error;

    fn try_from(value: BigUint) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<BigInt> for GodelNumber {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<Self> {
        Self::try_from(&value)
    }
}

impl TryFrom<&BigInt> for GodelNumber {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self> {
        match value.to_biguint() {
            Some(unsigned) => Self::new(unsigned),
            None => Err(Error::InvalidGodelNumber {
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<u64> for GodelNumber {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(BigUint::from(value))
    }
}

impl From<GodelNumber> for BigUint {
    fn from(value: GodelNumber) -> Self {
        value.0
    }
}

/// Parse the canonical base-10 form: ASCII digits only, without sign,
/// separators or leading zeros. Anything else, zero included, is reported as
/// [`Error::InvalidGodelNumber`].
impl FromStr for GodelNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidGodelNumber {
            value: s.to_string(),
        };

        if s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(invalid)
            .and_then(Self::new)
    }
}

impl std::fmt::Display for GodelNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
