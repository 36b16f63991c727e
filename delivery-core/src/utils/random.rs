#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::seq::index::sample;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Picks `amount` distinct indices from `0..length` range. Returns less values if `amount` exceeds `length`.
    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize>;

    /// Returns indices of `0..length` range in random order.
    fn shuffled_indices(&self, length: usize) -> Vec<usize>;
}

/// A default random implementation backed by `StdRng`.
pub struct DefaultRandom {
    rng: RefCell<StdRng>,
}

impl DefaultRandom {
    /// Creates a new instance `DefaultRandom` with seed. Instances with the same seed
    /// produce the same sequence of values.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(StdRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }

    fn sample_indices(&self, length: usize, amount: usize) -> Vec<usize> {
        sample(&mut *self.rng.borrow_mut(), length, amount.min(length)).into_vec()
    }

    fn shuffled_indices(&self, length: usize) -> Vec<usize> {
        let mut indices = (0..length).collect::<Vec<_>>();
        indices.shuffle(&mut *self.rng.borrow_mut());

        indices
    }
}
