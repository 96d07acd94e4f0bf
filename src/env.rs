mod action_space;

pub use action_space::ActionSpace;

/// Anything that exposes a discrete action space.
///
/// Simulation (`reset`/`step`) lives with the environment owner; the
/// policies in this crate only need to know how many actions exist.
pub trait Env {
    fn action_space(&self) -> ActionSpace;
}

impl Env for ActionSpace {
    fn action_space(&self) -> ActionSpace {
        self.clone()
    }
}
