use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{PolicyError, Result};

/// A discrete space of `size` actions, numbered `0..size`.
#[derive(Debug, Clone)]
pub struct ActionSpace {
    pub size: usize,
    dist: Uniform<usize>,
}

impl ActionSpace {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PolicyError::InvalidArgument {
                message: "action space must contain at least one action".to_string(),
            });
        }
        Ok(Self {
            size,
            dist: Uniform::from(0..size),
        })
    }

    /// Draws one action uniformly from `0..size` using the caller's generator.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.dist.sample(rng)
    }

    pub fn contains(&self, action: usize) -> bool {
        action < self.size
    }
}

impl PartialEq for ActionSpace {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
    }
}

impl Eq for ActionSpace {}
