use serde::{Deserialize, Serialize};

use crate::specs::ActFnSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Input,
    Dense,
}

/// One node of a model's computation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSummary {
    pub kind: LayerKind,
    pub units: usize,
    pub act_fn: Option<ActFnSpec>,
    pub params: usize,
}
