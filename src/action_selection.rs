mod epsilon_greedy;

use ndarray::{Array1, ArrayView1};

pub use epsilon_greedy::EpsilonGreedy;

/// Turns one state's action values into an action index.
pub trait ActionSelection {
    /// Picks an action; with `evaluate` set the selector must act greedily
    /// and leave any random state untouched.
    fn get_action(&mut self, values: ArrayView1<'_, f64>, evaluate: bool) -> usize;

    /// Probability of each action being picked by a non-evaluate call.
    fn get_exploration_probs(&self, values: ArrayView1<'_, f64>) -> Array1<f64>;
}
