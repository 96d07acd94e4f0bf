use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis};
use tracing::debug;

use crate::error::{PolicyError, Result};

use super::ActionValueTable;

/// Action values for integer states `0..n_states`, stored as a
/// `(n_states, n_actions)` matrix.
///
/// Looking up a state outside `0..n_states` panics.
#[derive(Debug, Clone)]
pub struct DenseQTable {
    values: Array2<f64>,
}

impl DenseQTable {
    pub fn new(n_states: usize, n_actions: usize, default_value: f64) -> Result<Self> {
        Self::from_array(Array2::from_elem((n_states, n_actions), default_value))
    }

    pub fn from_array(values: Array2<f64>) -> Result<Self> {
        if values.ncols() == 0 {
            return Err(PolicyError::InvalidArgument {
                message: "a dense q-table needs at least one action column".to_string(),
            });
        }
        debug!(
            n_states = values.nrows(),
            n_actions = values.ncols(),
            "creating dense q-table"
        );
        Ok(Self { values })
    }

    pub fn n_states(&self) -> usize {
        self.values.nrows()
    }

    pub fn row_mut(&mut self, state: usize) -> ArrayViewMut1<'_, f64> {
        self.values.index_axis_mut(Axis(0), state)
    }
}

impl ActionValueTable<usize> for DenseQTable {
    fn values_for(&self, state: &usize) -> ArrayView1<'_, f64> {
        self.values.index_axis(Axis(0), *state)
    }

    fn action_count(&self) -> usize {
        self.values.ncols()
    }
}
