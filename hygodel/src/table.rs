//! Symbol table
//!
//! The [`SymbolTable`] is the bijection between [`Symbol`]s and their codes:
//!
//! - constant signs carry the fixed codes `1..=12`;
//! - the variable of family `F` with ordinal `n` is coded `q^e`, where `q` is
//!   the `(n + 1)`-th prime above 12 (`13, 17, 19, 23, ...`) and `e` is the
//!   exponent of `F` (1 for numerical, 2 for sentential, 3 for predicate
//!   variables).
//!
//! Decoding a code therefore only needs its factorization: a code that is not
//! a constant must be a single prime above 12 raised to 1, 2 or 3.
//!
//! The table also classifies input characters. Classification is resolved
//! once, when the table is built, into a map from character to
//! [`SymbolClass`]; the lexer then only performs lookups.
use std::collections::BTreeMap;

use log::trace;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use strum::{EnumIs, IntoEnumIterator};

use crate::{
    constants::{LEX_ERROR_CONTEXT, MAX_CONSTANT_CODE, TICK},
    error::{Error, Result},
    primes::PrimeSequence,
    symbol::{ConstantSign, Formula, Symbol, Variable, VariableFamily},
};

/// Code of a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SymbolCode(pub u64);

impl SymbolCode {
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a single input character stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum SymbolClass {
    /// A constant sign.
    Constant(ConstantSign),

    /// The letter at position `slot` of the pool of `family`.
    Variable { family: VariableFamily, slot: usize },

    /// The tick mark, only valid right after a variable letter.
    Tick,
}

/// Bijection between symbols and codes, see the module documentation.
///
/// Example:
/// ```rust
/// # use hygodel::{primes::PrimeSequence, table::SymbolTable};
/// let primes = PrimeSequence::new();
/// let table = SymbolTable::new(&primes);
/// let formula = table.parse("(∃x)(x=sy)").unwrap();
/// let codes: Vec<u64> = formula
///     .iter()
///     .map(|s| table.code_of(s, &primes).unwrap().value())
///     .collect();
/// assert_eq!(codes, [8, 4, 13, 9, 8, 13, 5, 7, 17, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    classes: BTreeMap<char, SymbolClass>,
    constants: [ConstantSign; MAX_CONSTANT_CODE as usize],
    /// Number of primes not above [`MAX_CONSTANT_CODE`]; the variable of
    /// ordinal `n` uses prime number `offset + n + 1`.
    offset: usize,
}

impl SymbolTable {
    /// Build the table. `primes` is only used to locate the first prime above
    /// the constant codes.
    pub fn new(primes: &PrimeSequence) -> Self {
        let mut classes = BTreeMap::new();
        let mut constants = [None; MAX_CONSTANT_CODE as usize];

        for sign in ConstantSign::iter() {
            let previous = classes.insert(sign.as_char(), SymbolClass::Constant(sign));
            debug_assert!(previous.is_none(), "duplicate constant sign `{}`", sign);

            let previous = constants[sign.code() as usize - 1].replace(sign);
            debug_assert!(
                previous.is_none(),
                "constant code {} is already in use",
                sign.code()
            );
        }
        let constants = constants.map(|sign| sign.unwrap_or(ConstantSign::Not));

        for family in VariableFamily::iter() {
            for (slot, &letter) in family.pool().iter().enumerate() {
                let previous = classes.insert(letter, SymbolClass::Variable { family, slot });
                debug_assert!(
                    previous.is_none(),
                    "variable letter `{}` is already in use",
                    letter
                );
            }
        }

        let previous = classes.insert(TICK, SymbolClass::Tick);
        debug_assert!(previous.is_none(), "tick mark `{}` is already in use", TICK);

        let offset = (1..=MAX_CONSTANT_CODE)
            .filter(|&value| primes.is_prime(value))
            .count();

        Self {
            classes,
            constants,
            offset,
        }
    }

    /// Classify a single character, [`None`] if it is not part of the vocabulary.
    #[inline]
    pub fn classify(&self, c: char) -> Option<SymbolClass> {
        self.classes.get(&c).copied()
    }

    /// Code of `symbol`.
    pub fn code_of(&self, symbol: &Symbol, primes: &PrimeSequence) -> Result<SymbolCode> {
        match symbol {
            Symbol::Constant(sign) => Ok(SymbolCode(sign.code())),
            Symbol::Variable(variable) => {
                let overflow = || Error::SymbolCodeOverflow {
                    family: variable.family,
                    ordinal: variable.ordinal,
                };

                let index = variable
                    .ordinal
                    .checked_add(self.offset + 1)
                    .ok_or_else(overflow)?;
                let prime = primes.nth_prime(index)?;
                prime
                    .checked_pow(variable.family.exponent())
                    .map(SymbolCode)
                    .ok_or_else(overflow)
            }
        }
    }

    /// Symbol coded by `code`.
    ///
    /// Fails with [`Error::InvalidCode`] if `code` is neither a constant code
    /// nor a prime above the constant codes raised to a family exponent.
    pub fn symbol_of(&self, code: SymbolCode, primes: &PrimeSequence) -> Result<Symbol> {
        let invalid = || Error::InvalidCode { code: code.value() };

        match code.value() {
            0 => Err(invalid()),
            value @ 1..=MAX_CONSTANT_CODE => {
                Ok(Symbol::Constant(self.constants[value as usize - 1]))
            }
            value => {
                let factors = primes.factorize(&BigUint::from(value))?;
                let [factor] = factors.as_slice() else {
                    return Err(invalid());
                };

                let family = VariableFamily::from_exponent(factor.exponent).ok_or_else(invalid)?;
                let prime = factor.prime.to_u64().ok_or_else(invalid)?;
                if prime <= MAX_CONSTANT_CODE {
                    return Err(invalid());
                }

                let index = primes.index_of(prime).ok_or_else(invalid)?;
                Ok(Symbol::Variable(Variable::new(
                    family,
                    index - self.offset - 1,
                )))
            }
        }
    }

    /// Split `text` into symbols.
    ///
    /// Every character must be a constant sign or a variable letter; a letter
    /// absorbs all tick marks that immediately follow it. Whitespace is not
    /// part of the vocabulary and is rejected like any other character.
    pub fn parse(&self, text: &str) -> Result<Formula> {
        let mut formula = Formula::new();
        let mut chars = text.char_indices().enumerate().peekable();

        while let Some((position, (offset, c))) = chars.next() {
            match self.classify(c) {
                Some(SymbolClass::Constant(sign)) => formula.push(sign),
                Some(SymbolClass::Variable { family, slot }) => {
                    let mut ticks = 0;
                    while chars.next_if(|(_, (_, next))| *next == TICK).is_some() {
                        ticks += 1;
                    }
                    formula.push(Variable::from_slot(family, slot, ticks));
                }
                Some(SymbolClass::Tick) | None => {
                    return Err(Error::UnknownSymbol {
                        symbol: c,
                        position,
                        near: text[offset..].chars().take(LEX_ERROR_CONTEXT).collect(),
                    });
                }
            }
        }

        trace!("Lexed {} symbols from {:?}.", formula.len(), text);
        Ok(formula)
    }
}
