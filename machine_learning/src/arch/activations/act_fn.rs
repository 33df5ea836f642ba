use super::{Sigmoid, Tanh};
use crate::specs::ActFnSpec;

/// An element-wise activation function applied at the output of a layer.
#[derive(Clone, Debug, PartialEq)]
pub enum ActFn {
    Sigmoid(Sigmoid),
    Tanh(Tanh),
}

impl ActFn {
    pub fn sigmoid(amp: f32) -> Self {
        ActFn::Sigmoid(Sigmoid::new(amp))
    }

    pub fn tanh() -> Self {
        ActFn::Tanh(Tanh)
    }

    pub fn f(&self, x: f32) -> f32 {
        match self {
            ActFn::Sigmoid(a) => a.f(x),
            ActFn::Tanh(a) => a.f(x),
        }
    }

    /// Returns the serializable description of this activation.
    pub fn spec(&self) -> ActFnSpec {
        match self {
            ActFn::Sigmoid(a) => ActFnSpec::Sigmoid { amp: a.amp() },
            ActFn::Tanh(_) => ActFnSpec::Tanh,
        }
    }
}

impl From<ActFnSpec> for ActFn {
    fn from(spec: ActFnSpec) -> Self {
        match spec {
            ActFnSpec::Sigmoid { amp } => ActFn::sigmoid(amp),
            ActFnSpec::Tanh => ActFn::tanh(),
        }
    }
}
