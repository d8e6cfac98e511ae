use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

use crate::symbol::VariableFamily;

/// Reason a positive integer was rejected as a Gödel number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs)]
pub enum Malformation {
    /// What is left once the first `index - 1` primes are divided out is not
    /// divisible by the `index`-th prime, so some factor skips it.
    PrimeGap { index: usize, expected: u64 },

    /// The exponent of the `index`-th prime is not the code of any symbol.
    InvalidExponent { index: usize, code: u64 },
}

impl std::fmt::Display for Malformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Malformation::PrimeGap { index, expected } => write!(
                f,
                "prime {expected} at position {index} is missing while larger primes divide it"
            ),
            Malformation::InvalidExponent { index, code } => write!(
                f,
                "exponent {code} of prime at position {index} is not a symbol code"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum Error {
    /// Input text contains a character outside the vocabulary.
    #[error(
        "Unknown symbol `{symbol}` at position {position}. Error lexing input near `{near}`..."
    )]
    UnknownSymbol {
        symbol: char,
        position: usize,
        near: String,
    },

    /// Decode input is not a positive integer.
    #[error("`{value}` is not a Gödel number: expected a positive integer.")]
    InvalidGodelNumber { value: String },

    /// Decode input is a positive integer that no formula encodes to.
    #[error("Not a Gödel number: {0}.")]
    MalformedGodelNumber(Malformation),

    /// Code is not produced by any constant sign or variable family.
    #[error("{code} is not a constant code, nor a prime above 12 raised to the power 1, 2 or 3.")]
    InvalidCode { code: u64 },

    /// Factorization was requested for zero.
    #[error("Cannot factorize {value}: only positive integers have a prime factorization.")]
    FactorizationError { value: String },

    /// Primes are indexed from 1.
    #[error("Prime indices start at 1, index 0 was requested.")]
    InvalidPrimeIndex,

    /// Derived variable code does not fit in 64 bits.
    #[error("The code of the {family} variable of ordinal {ordinal} exceeds the range of symbol codes.")]
    SymbolCodeOverflow {
        family: VariableFamily,
        ordinal: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
