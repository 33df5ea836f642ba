use ndarray::{Array2, ArrayView2};

use super::Dense;
use crate::{Result, arch::activations::ActFn, specs::LayerSpec};

#[derive(Clone, Debug)]
pub enum Layer {
    Dense(Dense),
}

impl Layer {
    pub fn dense(dim: (usize, usize), act_fn: Option<ActFn>) -> Self {
        Self::Dense(Dense::new(dim, act_fn))
    }

    pub fn size(&self) -> usize {
        match self {
            Layer::Dense(l) => l.size(),
        }
    }

    /// Returns the input and output widths of the layer.
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Layer::Dense(l) => l.dim(),
        }
    }

    pub fn act_fn(&self) -> Option<&ActFn> {
        match self {
            Layer::Dense(l) => l.act_fn(),
        }
    }

    pub fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>> {
        match self {
            Layer::Dense(l) => l.forward(params, x),
        }
    }

    pub fn spec(&self) -> LayerSpec {
        let (input, output) = self.dim();
        LayerSpec {
            input,
            output,
            act_fn: self.act_fn().map(ActFn::spec),
        }
    }
}

impl From<&LayerSpec> for Layer {
    fn from(spec: &LayerSpec) -> Self {
        Layer::dense((spec.input, spec.output), spec.act_fn.map(ActFn::from))
    }
}
