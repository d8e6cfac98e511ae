//! Hygodel: Gödel numbering of formulas.
//!
//! Formulas are finite sequences of symbols over the vocabulary of Nagel &
//! Newman's *Gödel's Proof*. The formula `s₁ s₂ … sₖ` is numbered
//!
//! ```text
//! 2^code(s₁) · 3^code(s₂) · 5^code(s₃) · … · pₖ^code(sₖ)
//! ```
//!
//! and, by uniqueness of prime factorization, recovered from that number.
//!
//! Building blocks
//!  - [`table::SymbolTable`]: symbol ↔ code bijection and the lexer.
//!  - [`primes::PrimeSequence`]: shared, lazily grown prime cache and factorizer.
//!  - [`encoder::Encoder`] and [`decoder::Decoder`]: the two directions of the
//!    numbering, both borrowing the shared services through `Arc`s.
//!  - [`numbering::GodelNumbering`]: text-level facade over all of the above.
//!
//! Numbers grow quickly: even ten-symbol formulas give numbers with close to
//! a hundred digits, hence all arithmetic is done on `num_bigint` integers.
//!
//! Example
//! ```
//! use hygodel::prelude::*;
//!
//! let numbering = GodelNumbering::new();
//! let number = numbering.encode("(∃x)(x=sy)").unwrap();
//! assert_eq!(
//!     number.to_string(),
//!     "172225505803959398742621651659678877886965404082311908389214945877004912002249920215937500000000"
//! );
//! assert_eq!(numbering.decode_str(&number.to_string()).unwrap(), "(∃x)(x=sy)");
//! ```

/// Vocabulary constants.
pub mod constants;
/// Decoding of numbers into formulas.
pub mod decoder;
/// Encoding of formulas into numbers.
pub mod encoder;
/// Error type shared by the whole crate.
pub mod error;
/// Positive integer wrapper used on both sides of the numbering.
pub mod number;
/// Text-level facade.
pub mod numbering;
/// Prime cache and factorization.
pub mod primes;
/// Symbols and formulas.
pub mod symbol;
/// Symbol table and lexer.
pub mod table;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::decoder::Decoder;
    pub use crate::encoder::Encoder;
    pub use crate::error::{Error, Malformation, Result};
    pub use crate::number::GodelNumber;
    pub use crate::numbering::GodelNumbering;
    pub use crate::primes::{Factor, PrimeSequence};
    pub use crate::symbol::{ConstantSign, Formula, Symbol, Variable, VariableFamily};
    pub use crate::table::{SymbolClass, SymbolCode, SymbolTable};
}
