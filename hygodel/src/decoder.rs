use std::sync::Arc;

use log::{debug, trace};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

use crate::{
    error::{Error, Malformation, Result},
    number::GodelNumber,
    primes::{PrimeSequence, divide_out},
    symbol::Formula,
    table::{SymbolCode, SymbolTable},
};

/// Turns Gödel numbers back into formulas.
///
/// Decoding is a single pass over the primes `2, 3, 5, ...`: the multiplicity
/// of the `i`-th prime is divided out of the number and must be a symbol code.
/// A prime that does not divide what is left, while something other than 1 is
/// left, is a gap in the factorization. This yields the same result as
/// factorizing the number first, but a gap is caught without searching for the
/// factor that lies beyond it.
#[derive(Debug, Clone)]
pub struct Decoder {
    table: Arc<SymbolTable>,
    primes: Arc<PrimeSequence>,
}

impl Decoder {
    pub fn new(table: Arc<SymbolTable>, primes: Arc<PrimeSequence>) -> Self {
        Self { table, primes }
    }

    pub fn decode(&self, number: &GodelNumber) -> Result<Formula> {
        let mut formula = Formula::new();
        let mut remaining = number.as_biguint().clone();

        while !remaining.is_one() {
            let index = formula.len() + 1;
            let expected = self.primes.nth_prime(index)?;

            let code = divide_out(&mut remaining, &BigUint::from(expected));
            if code == 0 {
                return Err(reject(Malformation::PrimeGap { index, expected }));
            }

            let symbol = self
                .table
                .symbol_of(SymbolCode(code), &self.primes)
                .map_err(|err| match err {
                    Error::InvalidCode { .. } => {
                        reject(Malformation::InvalidExponent { index, code })
                    }
                    other => other,
                })?;
            formula.push(symbol);
        }

        trace!(
            "Decoded a {}-bit number into {} symbols.",
            number.as_biguint().bits(),
            formula.len()
        );
        Ok(formula)
    }

    /// Decode a signed integer, rejecting zero and negative values.
    pub fn decode_int(&self, number: &BigInt) -> Result<Formula> {
        self.decode(&GodelNumber::try_from(number)?)
    }

    /// Decode the base-10 form of a number.
    pub fn decode_str(&self, number: &str) -> Result<Formula> {
        self.decode(&number.parse()?)
    }
}

fn reject(malformation: Malformation) -> Error {
    debug!("Rejected Gödel number: {}.", malformation);
    Error::MalformedGodelNumber(malformation)
}
