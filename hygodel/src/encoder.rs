use std::sync::Arc;

use log::trace;
use num_bigint::BigUint;
use num_traits::{One, Pow};

use crate::{
    error::Result,
    number::GodelNumber,
    primes::PrimeSequence,
    symbol::Formula,
    table::SymbolTable,
};

/// Turns formulas into Gödel numbers.
///
/// The symbol at position `i` (1-indexed) contributes the factor
/// `p_i ^ code`, where `p_i` is the `i`-th prime. The empty formula encodes to
/// the empty product, 1.
#[derive(Debug, Clone)]
pub struct Encoder {
    table: Arc<SymbolTable>,
    primes: Arc<PrimeSequence>,
}

impl Encoder {
    pub fn new(table: Arc<SymbolTable>, primes: Arc<PrimeSequence>) -> Self {
        Self { table, primes }
    }

    /// Encode an already lexed formula.
    pub fn encode(&self, formula: &Formula) -> Result<GodelNumber> {
        let mut product = BigUint::one();

        for (position, symbol) in formula.iter().enumerate() {
            let code = self.table.code_of(symbol, &self.primes)?;
            let prime = BigUint::from(self.primes.nth_prime(position + 1)?);
            product *= Pow::pow(prime, code.value());
        }

        trace!(
            "Encoded a formula of {} symbols into a {}-bit number.",
            formula.len(),
            product.bits()
        );
        Ok(GodelNumber::from_positive(product))
    }

    /// Lex `text` and encode the resulting formula.
    pub fn encode_str(&self, text: &str) -> Result<GodelNumber> {
        let formula = self.table.parse(text)?;
        self.encode(&formula)
    }
}
