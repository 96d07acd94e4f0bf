mod dense_q_table;
mod q_table;

use ndarray::ArrayView1;

pub use dense_q_table::DenseQTable;
pub use q_table::QTable;

/// Read access to estimated action values, one row per state.
///
/// Every row must hold exactly `action_count()` values. What happens for a
/// state the table has never seen is up to the implementor.
pub trait ActionValueTable<S> {
    fn values_for(&self, state: &S) -> ArrayView1<'_, f64>;

    fn action_count(&self) -> usize;
}

impl<S, T: ActionValueTable<S> + ?Sized> ActionValueTable<S> for &T {
    fn values_for(&self, state: &S) -> ArrayView1<'_, f64> {
        (**self).values_for(state)
    }

    fn action_count(&self) -> usize {
        (**self).action_count()
    }
}
