use log::debug;
use ndarray::{Array2, ArrayView2};
use rand::Rng;

use super::{LayerSummary, Sequential, layers::Layer};
use crate::{
    Result,
    initialization::{ConstParamGen, ParamGen, RandParamGen},
    specs::ModelSpec,
};

/// A topology together with the flat parameters it runs on.
#[derive(Clone, Debug)]
pub struct Model {
    sequential: Sequential,
    params: Vec<f32>,
}

impl Model {
    /// Creates a new `Model` with freshly initialized parameters: Xavier uniform weights and zero
    /// biases for every dense layer.
    ///
    /// # Arguments
    /// * `sequential` - The model's topology.
    /// * `rng` - The random number generator to sample the weights from.
    ///
    /// # Returns
    /// The model or an error if a layer's initializer couldn't be built.
    pub fn init<R: Rng>(sequential: Sequential, rng: &mut R) -> Result<Self> {
        let mut params = Vec::with_capacity(sequential.size());

        for layer in sequential.layers() {
            let Layer::Dense(dense) = layer;
            if dense.size() == 0 {
                continue;
            }

            let (fan_in, fan_out) = dense.dim();
            let n_weights = fan_in * fan_out;
            let mut weights = RandParamGen::xavier_uniform(&mut *rng, n_weights, fan_in, fan_out)?;
            let mut biases = ConstParamGen::new(0., fan_out);

            params.extend(weights.sample(n_weights).unwrap_or_default());
            params.extend(biases.sample(fan_out).unwrap_or_default());
        }

        debug!("initialized {} parameters", params.len());
        Ok(Self { sequential, params })
    }

    pub fn sequential(&self) -> &Sequential {
        &self.sequential
    }

    pub fn params(&self) -> &[f32] {
        &self.params
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn topology(&self) -> Vec<LayerSummary> {
        self.sequential.topology()
    }

    pub fn spec(&self) -> ModelSpec {
        self.sequential.spec()
    }

    /// Predicts one output row per input row.
    pub fn predict(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.sequential.forward(&self.params, x)
    }
}
