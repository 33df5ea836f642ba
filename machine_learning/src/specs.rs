use serde::{Deserialize, Serialize};

/// Model selection and configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSpec {
    Sequential {
        input: usize,
        layers: Vec<LayerSpec>,
    },
}

/// Fully connected layer specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub input: usize,
    pub output: usize,
    /// `None` stands for a linear layer.
    pub act_fn: Option<ActFnSpec>,
}

/// Activation function specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Sigmoid { amp: f32 },
    Tanh,
}
