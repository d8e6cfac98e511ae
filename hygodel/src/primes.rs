//! Prime sequence
//!
//! [`PrimeSequence`] owns an append-only cache of the ascending primes
//! discovered so far. The cache is addressed both by index (the `n`-th prime)
//! and by value (binary search), and grows on demand by trial division against
//! the primes it already holds. Being derived data, a cache can be dropped and
//! rebuilt at any time without changing any result.
//!
//! The same sequence drives factorization: [`PrimeSequence::factors`] divides
//! a big integer by 2, 3, 5, ... in order, which is exactly the order in which
//! a Gödel number must present its factors.
use log::{debug, info};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::error::{Error, Result};

/// A prime factor together with its multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Factor {
    pub prime: BigUint,
    pub exponent: u64,
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}^{}", self.prime, self.exponent)
    }
}

/// Shared, lazily extended sequence of primes `2, 3, 5, 7, 11, ...`.
///
/// # A note on concurrency
/// Lookups that hit the cache only take a read lock, so any number of threads
/// may query the sequence concurrently. Growth holds an upgradable read lock
/// while searching for the missing primes, so at most one thread grows the
/// cache at a time while others keep reading the cached prefix. The lock is
/// upgraded to a write lock only to append the primes found.
///
/// Example:
/// ```rust
/// # use hygodel::primes::PrimeSequence;
/// let primes = PrimeSequence::new();
/// assert_eq!(primes.nth_prime(1).unwrap(), 2);
/// assert_eq!(primes.nth_prime(10).unwrap(), 29);
/// assert!(primes.is_prime(97));
/// assert_eq!(primes.index_of(13), Some(6));
/// ```
#[derive(Debug, Default)]
pub struct PrimeSequence {
    cache: RwLock<Vec<u64>>,
}

impl PrimeSequence {
    /// Create an empty sequence. Primes are generated on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence whose cache already holds every prime below `bound`.
    ///
    /// The cache is filled with a sieve of Eratosthenes, which is much faster
    /// than growing it one prime at a time when many primes are known to be
    /// needed up front.
    pub fn with_bound(bound: usize) -> Self {
        let primes = sieve(bound);
        info!(
            "Prewarmed prime cache with {} primes below {}.",
            primes.len(),
            bound
        );
        Self {
            cache: RwLock::new(primes),
        }
    }

    /// Create a sequence prewarmed with [`crate::constants::DEFAULT_PREWARM_BOUND`].
    pub fn prewarmed() -> Self {
        Self::with_bound(crate::constants::DEFAULT_PREWARM_BOUND as usize)
    }

    /// Number of primes currently cached.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Largest prime currently cached, if any.
    pub fn largest(&self) -> Option<u64> {
        self.cache.read().last().copied()
    }

    /// Return the `n`-th prime, 1-indexed (`nth_prime(1) == 2`).
    pub fn nth_prime(&self, n: usize) -> Result<u64> {
        if n == 0 {
            return Err(Error::InvalidPrimeIndex);
        }
        Ok(self.prime_at(n - 1))
    }

    /// Return `true` if `value` is prime.
    pub fn is_prime(&self, value: u64) -> bool {
        if value < 2 {
            return false;
        }

        {
            let cache = self.cache.read();
            if cache.last().is_some_and(|&largest| largest >= value) {
                return cache.binary_search(&value).is_ok();
            }
        }

        // Only primes up to the square root are needed to settle the question.
        self.ensure_covers(value.isqrt());
        let cache = self.cache.read();
        divisor_free(cache.iter(), value)
    }

    /// Return the 1-based index of `prime` in the sequence, or [`None`] if
    /// `prime` is not prime.
    pub fn index_of(&self, prime: u64) -> Option<usize> {
        if !self.is_prime(prime) {
            return None;
        }

        self.ensure_covers(prime);
        self.cache.read().binary_search(&prime).ok().map(|i| i + 1)
    }

    /// Factorize `n` into ascending prime powers.
    ///
    /// Fails with [`Error::FactorizationError`] for zero. One factorizes into
    /// the empty sequence.
    ///
    /// Example:
    /// ```rust
    /// # use hygodel::primes::PrimeSequence;
    /// # use num_bigint::BigUint;
    /// let primes = PrimeSequence::new();
    /// let factors = primes.factorize(&BigUint::from(360u32)).unwrap();
    /// let pairs: Vec<_> = factors.iter().map(|f| f.to_string()).collect();
    /// assert_eq!(pairs, ["2^3", "3^2", "5^1"]);
    /// ```
    pub fn factorize(&self, n: &BigUint) -> Result<Vec<Factor>> {
        Ok(self.factors(n)?.collect())
    }

    /// Lazy variant of [`Self::factorize`]: factors are produced in ascending
    /// order, each one as soon as its multiplicity is known.
    pub fn factors(&self, n: &BigUint) -> Result<Factors<'_>> {
        if n.is_zero() {
            return Err(Error::FactorizationError {
                value: n.to_string(),
            });
        }

        Ok(Factors {
            primes: self,
            remaining: n.clone(),
            position: 0,
        })
    }

    /// 0-based access to the sequence, growing the cache when needed.
    fn prime_at(&self, position: usize) -> u64 {
        if let Some(&prime) = self.cache.read().get(position) {
            return prime;
        }

        self.grow(|len, _| len > position);
        self.cache.read()[position]
    }

    /// Grow the cache until its largest prime is at least `value`.
    fn ensure_covers(&self, value: u64) {
        self.grow(|_, largest| largest.is_some_and(|largest| largest >= value));
    }

    /// Grow the cache until `done(len, largest)` holds.
    ///
    /// New primes are searched for under the upgradable read lock, which
    /// still admits readers of the cached prefix. The write lock is only taken
    /// to append them.
    fn grow(&self, done: impl Fn(usize, Option<u64>) -> bool) {
        let cache = self.cache.upgradable_read();
        if done(cache.len(), cache.last().copied()) {
            return;
        }

        let fresh = search_until(&cache, done);
        let mut cache = RwLockUpgradableReadGuard::upgrade(cache);
        let before = cache.len();
        cache.extend(fresh);

        debug!(
            "Extended prime cache from {} to {} primes (largest is {}).",
            before,
            cache.len(),
            cache.last().copied().unwrap_or_default()
        );
    }
}

/// Iterator over the prime factors of a positive integer, see
/// [`PrimeSequence::factors`].
pub struct Factors<'a> {
    primes: &'a PrimeSequence,
    remaining: BigUint,
    position: usize,
}

impl Iterator for Factors<'_> {
    type Item = Factor;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_one() {
            let prime = BigUint::from(self.primes.prime_at(self.position));
            self.position += 1;

            // No prime factor left below the square root: what remains is prime.
            if &prime * &prime > self.remaining {
                let prime = std::mem::replace(&mut self.remaining, BigUint::one());
                return Some(Factor { prime, exponent: 1 });
            }

            let exponent = divide_out(&mut self.remaining, &prime);
            if exponent > 0 {
                return Some(Factor { prime, exponent });
            }
        }

        None
    }
}

/// Divide every power of `prime` out of `value` and return the multiplicity.
///
/// The powers `prime^(2^k)` are tried, climbing while they divide and then
/// descending through them to settle the low bits of the multiplicity. The
/// number of big divisions is thus logarithmic in the exponent, which matters
/// for variable codes such as `13^3 = 2197`.
pub(crate) fn divide_out(value: &mut BigUint, prime: &BigUint) -> u64 {
    let mut exponent = 0;
    let mut powers = Vec::new();

    let mut power = prime.clone();
    while (&*value % &power).is_zero() {
        *value /= &power;
        exponent += 1u64 << powers.len();
        let next = &power * &power;
        powers.push(power);
        power = next;
    }

    while let Some(power) = powers.pop() {
        if (&*value % &power).is_zero() {
            *value /= &power;
            exponent += 1u64 << powers.len();
        }
    }

    exponent
}

/// Primes following `cached`, found one at a time until
/// `done(len, largest)` holds for `cached` and the new primes together.
fn search_until(cached: &[u64], done: impl Fn(usize, Option<u64>) -> bool) -> Vec<u64> {
    let mut fresh = Vec::new();
    loop {
        let largest = fresh.last().or(cached.last()).copied();
        if done(cached.len() + fresh.len(), largest) {
            return fresh;
        }

        let next = next_prime_after(cached, &fresh);
        fresh.push(next);
    }
}

/// Smallest prime above the last element of `cached` followed by `fresh`,
/// which together must hold every prime up to that element.
fn next_prime_after(cached: &[u64], fresh: &[u64]) -> u64 {
    let mut candidate = match fresh.last().or(cached.last()) {
        None => return 2,
        Some(2) => return 3,
        Some(&largest) => largest + 2,
    };

    while !divisor_free(cached.iter().chain(fresh), candidate) {
        candidate += 2;
    }
    candidate
}

/// `true` if no prime of `primes` up to `sqrt(value)` divides `value`.
fn divisor_free<'a>(primes: impl IntoIterator<Item = &'a u64>, value: u64) -> bool {
    primes
        .into_iter()
        .take_while(|&&p| p.saturating_mul(p) <= value)
        .all(|&p| value % p != 0)
}

/// All primes strictly below `bound`.
fn sieve(bound: usize) -> Vec<u64> {
    if bound <= 2 {
        return Vec::new();
    }

    // Slot `i` stands for the odd number `2i + 1`.
    let half = bound / 2;
    let mut composite = vec![false; half];
    let mut primes = vec![2];

    for i in 1..half {
        if composite[i] {
            continue;
        }

        let p = 2 * i + 1;
        primes.push(p as u64);

        let mut j = p.saturating_mul(p) / 2;
        while j < half {
            composite[j] = true;
            j += p;
        }
    }

    primes
}
