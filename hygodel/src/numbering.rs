use std::sync::Arc;

use num_bigint::BigInt;

use crate::{
    decoder::Decoder, encoder::Encoder, error::Result, number::GodelNumber,
    primes::PrimeSequence, table::SymbolTable,
};

/// Text-level entry point bundling an [`Encoder`] and a [`Decoder`] that share
/// one [`PrimeSequence`] and one [`SymbolTable`].
///
/// Cloning is cheap and clones share the prime cache, so a single instance can
/// be handed to several worker threads.
///
/// Example:
/// ```rust
/// # use hygodel::numbering::GodelNumbering;
/// let numbering = GodelNumbering::new();
/// let number = numbering.encode("0=0").unwrap();
/// assert_eq!(number.to_string(), "243000000");
/// assert_eq!(numbering.decode_str("243000000").unwrap(), "0=0");
/// ```
#[derive(Debug, Clone)]
pub struct GodelNumbering {
    encoder: Encoder,
    decoder: Decoder,
    primes: Arc<PrimeSequence>,
}

impl GodelNumbering {
    /// Create a numbering with its own, initially empty, prime cache.
    pub fn new() -> Self {
        Self::with_primes(Arc::new(PrimeSequence::new()))
    }

    /// Create a numbering on top of an existing prime cache.
    pub fn with_primes(primes: Arc<PrimeSequence>) -> Self {
        let table = Arc::new(SymbolTable::new(&primes));
        Self {
            encoder: Encoder::new(Arc::clone(&table), Arc::clone(&primes)),
            decoder: Decoder::new(table, Arc::clone(&primes)),
            primes,
        }
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn primes(&self) -> &Arc<PrimeSequence> {
        &self.primes
    }

    /// Encode the textual form of a formula.
    pub fn encode(&self, formula: &str) -> Result<GodelNumber> {
        self.encoder.encode_str(formula)
    }

    /// Decode a number into the textual form of its formula.
    pub fn decode(&self, number: &BigInt) -> Result<String> {
        Ok(self.decoder.decode_int(number)?.to_string())
    }

    /// Same as [`Self::decode`], for the base-10 form of the number.
    pub fn decode_str(&self, number: &str) -> Result<String> {
        Ok(self.decoder.decode_str(number)?.to_string())
    }
}

impl Default for GodelNumbering {
    fn default() -> Self {
        Self::new()
    }
}
