pub mod activations;
pub mod layers;
mod model;
mod sequential;
mod topology;

pub use model::Model;
pub use sequential::Sequential;
pub use topology::{LayerKind, LayerSummary};
