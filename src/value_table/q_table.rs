use fxhash::FxHashMap;
use ndarray::{Array1, ArrayView1};
use std::hash::Hash;
use tracing::debug;

use crate::env::Env;
use crate::error::{PolicyError, Result};

use super::ActionValueTable;

/// Hash-map backed action values with a default row for unseen states.
#[derive(Debug, Clone)]
pub struct QTable<S: Hash + PartialEq + Eq + Clone> {
    default: Array1<f64>,
    values: FxHashMap<S, Array1<f64>>,
}

impl<S: Hash + PartialEq + Eq + Clone> QTable<S> {
    pub fn new(action_count: usize, default_value: f64) -> Self {
        debug!(action_count, default_value, "creating q-table");
        Self {
            default: Array1::from_elem(action_count, default_value),
            values: FxHashMap::default(),
        }
    }

    pub fn from_env<E: Env + ?Sized>(env: &E, default_value: f64) -> Self {
        Self::new(env.action_space().size, default_value)
    }

    /// Row for `state`, inserting the default row first if it is missing.
    pub fn get_mut(&mut self, state: S) -> &mut Array1<f64> {
        let default = &self.default;
        self.values.entry(state).or_insert_with(|| default.clone())
    }

    pub fn insert(&mut self, state: S, row: Array1<f64>) -> Result<()> {
        if row.len() != self.default.len() {
            return Err(PolicyError::DimensionMismatch {
                expected: self.default.len(),
                got: row.len(),
            });
        }
        self.values.insert(state, row);
        Ok(())
    }

    pub fn contains(&self, state: &S) -> bool {
        self.values.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn reset(&mut self) {
        self.values = FxHashMap::default();
    }
}

impl<S: Hash + PartialEq + Eq + Clone> ActionValueTable<S> for QTable<S> {
    fn values_for(&self, state: &S) -> ArrayView1<'_, f64> {
        self.values.get(state).unwrap_or(&self.default).view()
    }

    fn action_count(&self) -> usize {
        self.default.len()
    }
}
