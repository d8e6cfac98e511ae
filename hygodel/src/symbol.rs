//! Symbols of the formal system and the formulas built from them.
//!
//! A [`Symbol`] is either one of the twelve [`ConstantSign`]s or a
//! [`Variable`] of one of three closed [`VariableFamily`]s. Symbols carry no
//! code by themselves, codes are assigned by [`crate::table::SymbolTable`].
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumIter, EnumTryAs};

use crate::constants::{
    CONSTANT_SIGNS, NUMERICAL_VARIABLES, PREDICATE_VARIABLES, SENTENTIAL_VARIABLES, TICK,
};

/// One of the constant signs of the vocabulary.
///
/// Discriminants are the codes of the signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ConstantSign {
    /// `~`, negation
    Not = 1,
    /// `∨`, disjunction
    Or = 2,
    /// `⊃`, implication
    Implies = 3,
    /// `∃`, existential quantifier
    Exists = 4,
    /// `=`
    Equals = 5,
    /// `0`, the numeral zero
    Zero = 6,
    /// `s`, immediate successor
    Successor = 7,
    /// `(`
    LeftParen = 8,
    /// `)`
    RightParen = 9,
    /// `,`
    Comma = 10,
    /// `+`
    Plus = 11,
    /// `×`
    Times = 12,
}

impl ConstantSign {
    /// Code assigned to the sign.
    #[inline]
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// Literal character of the sign.
    pub const fn as_char(self) -> char {
        CONSTANT_SIGNS[self as usize - 1]
    }
}

impl std::fmt::Display for ConstantSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Open-ended class of variables sharing a derivation rule.
///
/// Members of family `F` are coded as `q^e` where `e` is [`Self::exponent`]
/// and `q` is a prime above the constant codes selected by the ordinal of the
/// variable. Since the exponents differ, no two families share a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VariableFamily {
    /// Variables ranging over numbers (`x`, `y`, `z`, ...).
    Numerical,
    /// Variables ranging over sentences (`p`, `q`, `r`, ...).
    Sentential,
    /// Variables ranging over predicates (`P`, `Q`, `R`, ...).
    Predicate,
}

impl VariableFamily {
    /// Letters reserved for the family.
    pub const fn pool(self) -> &'static [char] {
        match self {
            VariableFamily::Numerical => &NUMERICAL_VARIABLES,
            VariableFamily::Sentential => &SENTENTIAL_VARIABLES,
            VariableFamily::Predicate => &PREDICATE_VARIABLES,
        }
    }

    /// Power applied to the prime selected by a variable ordinal.
    pub const fn exponent(self) -> u32 {
        match self {
            VariableFamily::Numerical => 1,
            VariableFamily::Sentential => 2,
            VariableFamily::Predicate => 3,
        }
    }

    /// Inverse of [`Self::exponent`].
    pub const fn from_exponent(exponent: u64) -> Option<Self> {
        match exponent {
            1 => Some(VariableFamily::Numerical),
            2 => Some(VariableFamily::Sentential),
            3 => Some(VariableFamily::Predicate),
            _ => None,
        }
    }
}

impl std::fmt::Display for VariableFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableFamily::Numerical => write!(f, "numerical"),
            VariableFamily::Sentential => write!(f, "sentential"),
            VariableFamily::Predicate => write!(f, "predicate"),
        }
    }
}

/// A variable, identified by its family and its ordinal within the family.
///
/// Ordinal `n` is written as `pool[n % len]` followed by `n / len` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    pub family: VariableFamily,
    pub ordinal: usize,
}

impl Variable {
    pub const fn new(family: VariableFamily, ordinal: usize) -> Self {
        Self { family, ordinal }
    }

    pub const fn numerical(ordinal: usize) -> Self {
        Self::new(VariableFamily::Numerical, ordinal)
    }

    pub const fn sentential(ordinal: usize) -> Self {
        Self::new(VariableFamily::Sentential, ordinal)
    }

    pub const fn predicate(ordinal: usize) -> Self {
        Self::new(VariableFamily::Predicate, ordinal)
    }

    /// Build a variable from its pool slot and the number of trailing ticks.
    pub const fn from_slot(family: VariableFamily, slot: usize, ticks: usize) -> Self {
        Self::new(family, ticks * family.pool().len() + slot)
    }

    /// Letter used for this variable.
    pub fn letter(&self) -> char {
        let pool = self.family.pool();
        pool[self.ordinal % pool.len()]
    }

    /// Number of tick marks following the letter.
    pub fn ticks(&self) -> usize {
        self.ordinal / self.family.pool().len()
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())?;
        for _ in 0..self.ticks() {
            write!(f, "{}", TICK)?;
        }
        Ok(())
    }
}

/// A single symbol of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    Constant(ConstantSign),
    Variable(Variable),
}

impl From<ConstantSign> for Symbol {
    fn from(value: ConstantSign) -> Self {
        Symbol::Constant(value)
    }
}

impl From<Variable> for Symbol {
    fn from(value: Variable) -> Self {
        Symbol::Variable(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Constant(sign) => write!(f, "{sign}"),
            Symbol::Variable(variable) => write!(f, "{variable}"),
        }
    }
}

/// An ordered, finite sequence of symbols.
///
/// No well-formedness is implied: `)(∃` is a perfectly valid formula as far as
/// the numbering is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formula(Vec<Symbol>);

impl Formula {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, symbol: impl Into<Symbol>) {
        self.0.push(symbol.into());
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.0
    }
}

impl Deref for Formula {
    type Target = [Symbol];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Symbol>> for Formula {
    fn from(value: Vec<Symbol>) -> Self {
        Self(value)
    }
}

impl FromIterator<Symbol> for Formula {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
