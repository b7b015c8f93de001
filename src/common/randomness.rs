//! A swappable `u64` randomness source.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::RngCore;

use crate::{Container, Feature};

/// A random-number source behind a closure, usable wherever the `rand` crate
/// expects an [`RngCore`].
///
/// Loads as [`Randomness::system`] by default. Deterministic variants
/// ([`linear_congruential`](Randomness::linear_congruential),
/// [`constant`](Randomness::constant)) make randomness-dependent code
/// reproducible in tests.
///
/// # Examples
///
/// ```rust
/// use feature_container::common::Randomness;
/// use feature_container::Container;
///
/// let container = Container::new();
/// container.set_feature::<Randomness>(Randomness::linear_congruential(42));
/// let a = container.feature::<Randomness>();
/// let b = Randomness::linear_congruential(42);
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Clone)]
pub struct Randomness {
    randomness: Arc<dyn Fn() -> u64 + Send + Sync>,
}

impl Randomness {
    /// Wraps an arbitrary generator closure.
    pub fn new(randomness: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            randomness: Arc::new(randomness),
        }
    }

    /// The next value from this source.
    pub fn next(&self) -> u64 {
        (self.randomness)()
    }

    /// Draws from the operating system's entropy via the `rand` crate.
    pub fn system() -> Self {
        Self::new(rand::random::<u64>)
    }

    /// A deterministic linear congruential generator seeded with `seed`
    /// (Knuth's MMIX constants). The seed state is shared by clones.
    pub fn linear_congruential(seed: u64) -> Self {
        let state = Mutex::new(seed);
        Self::new(move || {
            let mut seed = state.lock();
            *seed = seed
                .wrapping_mul(2_862_933_555_777_941_757)
                .wrapping_add(3_037_000_493);
            *seed
        })
    }

    /// Always yields `value`.
    pub fn constant(value: u64) -> Self {
        Self::new(move || value)
    }

    /// Picks one element of `values`.
    ///
    /// # Panics
    ///
    /// Panics when `values` is empty.
    pub fn pick<'a, T>(&self, values: &'a [T]) -> &'a T {
        assert!(!values.is_empty(), "cannot pick from an empty slice");
        let index = (self.next() % values.len() as u64) as usize;
        &values[index]
    }
}

impl RngCore for Randomness {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl Feature for Randomness {
    type Instance = Randomness;

    fn load(_container: &Container) -> Randomness {
        Randomness::system()
    }
}
