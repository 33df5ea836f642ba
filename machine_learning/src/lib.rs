pub mod arch;
pub mod error;
pub mod factory;
pub mod initialization;
pub mod specs;

pub use arch::Model;
pub use error::{MlErr, Result};
pub use factory::{get_model, get_model_with_rng};
