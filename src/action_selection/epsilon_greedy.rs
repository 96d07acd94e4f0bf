use ndarray::{Array1, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::env::{ActionSpace, Env};
use crate::error::{PolicyError, Result};
use crate::utils::argmax;
use crate::value_table::ActionValueTable;

use super::ActionSelection;

/// Epsilon-greedy selection with a private, seeded generator.
///
/// A call explores (uniform random action) with probability `epsilon` and
/// otherwise exploits the first action holding the maximum value. Policies
/// built from the same seed and driven by the same calls return the same
/// actions.
///
/// Randomness consumed per call:
/// - `evaluate = true`: none
/// - exploit: one `f64` threshold draw
/// - explore: the threshold draw plus one action draw
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<R = ChaCha8Rng> {
    epsilon: f64,
    action_space: ActionSpace,
    rng: R,
}

impl EpsilonGreedy {
    /// Creates a policy whose generator is seeded from `seed`.
    ///
    /// Fails with [`PolicyError::InvalidArgument`] unless `0 <= epsilon <= 1`.
    pub fn new(action_space: &ActionSpace, epsilon: f64, seed: u64) -> Result<Self> {
        Self::with_rng(action_space, epsilon, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_env<E: Env + ?Sized>(env: &E, epsilon: f64, seed: u64) -> Result<Self> {
        Self::new(&env.action_space(), epsilon, seed)
    }
}

impl<R: Rng> EpsilonGreedy<R> {
    pub fn with_rng(action_space: &ActionSpace, epsilon: f64, rng: R) -> Result<Self> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::InvalidArgument {
                message: format!("epsilon must be in [0, 1], got {}", epsilon),
            });
        }
        debug!(epsilon, n_actions = action_space.size, "creating epsilon-greedy policy");
        Ok(Self {
            epsilon,
            action_space: action_space.clone(),
            rng,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    pub fn action_count(&self) -> usize {
        self.action_space.size
    }

    /// Selects an action for `state` from the values in `q`.
    pub fn get_action<S, Q>(&mut self, q: &Q, state: &S, evaluate: bool) -> usize
    where
        Q: ActionValueTable<S> + ?Sized,
    {
        self.choose(q.values_for(state), evaluate)
    }

    /// The action `get_action` returns with `evaluate = true`.
    pub fn select_greedy<S, Q>(&self, q: &Q, state: &S) -> usize
    where
        Q: ActionValueTable<S> + ?Sized,
    {
        self.greedy(q.values_for(state))
    }

    fn greedy(&self, values: ArrayView1<'_, f64>) -> usize {
        debug_assert_eq!(
            values.len(),
            self.action_space.size,
            "action values do not match the action space"
        );
        argmax(values.iter())
    }

    // u <= epsilon explores, so epsilon = 1 always explores.
    fn should_explore(&mut self) -> bool {
        self.rng.gen::<f64>() <= self.epsilon
    }

    fn choose(&mut self, values: ArrayView1<'_, f64>, evaluate: bool) -> usize {
        if evaluate || !self.should_explore() {
            let action = self.greedy(values);
            trace!(action, evaluate, "exploit");
            action
        } else {
            let action = self.action_space.sample(&mut self.rng);
            trace!(action, "explore");
            action
        }
    }
}

impl<R: Rng> ActionSelection for EpsilonGreedy<R> {
    fn get_action(&mut self, values: ArrayView1<'_, f64>, evaluate: bool) -> usize {
        self.choose(values, evaluate)
    }

    fn get_exploration_probs(&self, values: ArrayView1<'_, f64>) -> Array1<f64> {
        let count = self.action_space.size;
        let mut policy_probs: Array1<f64> = Array1::from_elem(count, self.epsilon / count as f64);
        policy_probs[self.greedy(values)] += 1.0 - self.epsilon;
        policy_probs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_table::QTable;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn table(row: Array1<f64>) -> QTable<u32> {
        let mut q = QTable::new(row.len(), 0.0);
        q.insert(0, row).unwrap();
        q
    }

    #[test]
    fn test_rejects_epsilon_outside_unit_interval() {
        let space = ActionSpace::new(3).unwrap();
        for epsilon in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let err = EpsilonGreedy::new(&space, epsilon, 0).unwrap_err();
            assert!(matches!(err, PolicyError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_accepts_boundaries() {
        let space = ActionSpace::new(3).unwrap();
        for epsilon in [0.0, 0.25, 0.5, 1.0] {
            let policy = EpsilonGreedy::new(&space, epsilon, 0).unwrap();
            assert_eq!(policy.epsilon(), epsilon);
            assert_eq!(policy.action_count(), 3);
        }
    }

    #[test]
    fn test_evaluate_returns_first_maximum() {
        let space = ActionSpace::new(4).unwrap();
        let mut policy = EpsilonGreedy::new(&space, 1.0, 0).unwrap();
        let q = table(array![0.1, 0.9, 0.9, 0.2]);
        for _ in 0..20 {
            assert_eq!(policy.get_action(&q, &0, true), 1);
        }
        assert_eq!(policy.select_greedy(&q, &0), 1);
    }

    #[test]
    fn test_evaluate_consumes_no_randomness() {
        let space = ActionSpace::new(5).unwrap();
        let q: QTable<u32> = QTable::new(5, 0.0);
        let mut a = EpsilonGreedy::new(&space, 0.5, 9).unwrap();
        let mut b = EpsilonGreedy::new(&space, 0.5, 9).unwrap();
        for _ in 0..10 {
            a.get_action(&q, &0, true);
        }
        for _ in 0..100 {
            assert_eq!(a.get_action(&q, &0, false), b.get_action(&q, &0, false));
        }
    }

    #[test]
    fn test_exploit_consumes_one_draw_explore_two() {
        let space = ActionSpace::new(3).unwrap();
        let q = table(array![0.0, 0.0, 1.0]);

        // Exploiting with epsilon = 0 advances the stream by one f64.
        let mut policy = EpsilonGreedy::new(&space, 0.0, 5).unwrap();
        let mut reference = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(policy.get_action(&q, &0, false), 2);
        reference.gen::<f64>();
        assert_eq!(policy.rng.gen::<u64>(), reference.gen::<u64>());

        // Exploring with epsilon = 1 adds one uniform action draw.
        let mut policy = EpsilonGreedy::new(&space, 1.0, 5).unwrap();
        let mut reference = ChaCha8Rng::seed_from_u64(5);
        let action = policy.get_action(&q, &0, false);
        reference.gen::<f64>();
        assert_eq!(action, space.sample(&mut reference));
        assert_eq!(policy.rng.gen::<u64>(), reference.gen::<u64>());
    }

    #[test]
    fn test_exploration_probs() {
        let space = ActionSpace::new(4).unwrap();
        let policy = EpsilonGreedy::new(&space, 0.2, 0).unwrap();
        let probs = policy.get_exploration_probs(array![0.1, 0.9, 0.9, 0.2].view());
        assert_abs_diff_eq!(probs.sum(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[1], 0.85, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[2], 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_generator() {
        let space = ActionSpace::new(2).unwrap();
        let rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut policy = EpsilonGreedy::with_rng(&space, 0.0, rng).unwrap();
        let q = table(array![-1.0, 3.0]);
        assert_eq!(ActionSelection::get_action(&mut policy, q.values_for(&0), false), 1);
    }
}
