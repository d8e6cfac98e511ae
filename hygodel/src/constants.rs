//! Fixed vocabulary of the numbering.
//!
//! The constant signs and their codes follow the table of Nagel & Newman,
//! *Gödel's Proof* (p. 70 in the 2001 edition). Variables are not listed
//! individually; each family owns a small pool of letters that is reused with
//! an increasing number of [`TICK`] marks once exhausted.

/// Literal characters of the constant signs, in code order: the sign at
/// position `i` carries code `i + 1`, the discriminant of its
/// [`crate::symbol::ConstantSign`].
pub const CONSTANT_SIGNS: [char; 12] = ['~', '∨', '⊃', '∃', '=', '0', 's', '(', ')', ',', '+', '×'];

/// Largest code assigned to a constant sign. Variable codes are built from
/// primes strictly above this value.
pub const MAX_CONSTANT_CODE: u64 = 12;

/// Mark appended to a pool letter once the pool is exhausted, e.g. `x`, `y`,
/// `z`, then `` x` ``, `` y` ``, `` z` ``, then ``` x`` ``` and so on.
pub const TICK: char = '`';

/// Letters of the numerical variable family.
pub const NUMERICAL_VARIABLES: [char; 3] = ['x', 'y', 'z'];

/// Letters of the sentential variable family.
pub const SENTENTIAL_VARIABLES: [char; 3] = ['p', 'q', 'r'];

/// Letters of the predicate variable family.
pub const PREDICATE_VARIABLES: [char; 3] = ['P', 'Q', 'R'];

/// Number of input characters quoted back in a lexing error.
pub const LEX_ERROR_CONTEXT: usize = 10;

/// Default bound used by [`crate::primes::PrimeSequence::prewarmed`].
pub const DEFAULT_PREWARM_BOUND: u64 = 10_000;
