pub mod action_selection;
pub mod env;
pub mod utils;
pub mod value_table;

mod error;

pub use action_selection::{ActionSelection, EpsilonGreedy};
pub use env::{ActionSpace, Env};
pub use error::{PolicyError, Result};
pub use value_table::{ActionValueTable, DenseQTable, QTable};
