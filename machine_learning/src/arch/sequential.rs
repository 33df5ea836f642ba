use ndarray::{Array2, ArrayView2};

use super::{LayerKind, LayerSummary, layers::Layer};
use crate::{MlErr, Result, specs::ModelSpec};

/// A sequential model: an input of fixed width followed by layers through which information
/// flows forward when computing an output.
#[derive(Clone, Debug)]
pub struct Sequential {
    input: usize,
    layers: Vec<Layer>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `input` - The amount of features each input row has.
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance.
    pub fn new<I>(input: usize, layers: I) -> Self
    where
        I: IntoIterator<Item = Layer>,
    {
        Self {
            input,
            layers: layers.into_iter().collect(),
        }
    }

    pub fn input(&self) -> usize {
        self.input
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.layers.iter().map(Layer::size).sum()
    }

    /// Makes a forward pass through the network.
    ///
    /// # Arguments
    /// * `params` - The model's flat parameters, one slice per layer in order.
    /// * `x` - The input data, one sample per row.
    ///
    /// # Returns
    /// The prediction for the given input or an error if occurred.
    pub fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if params.len() != self.size() {
            return Err(MlErr::SizeMismatch {
                what: "model parameters",
                got: params.len(),
                expected: self.size(),
            });
        }

        if x.ncols() != self.input {
            return Err(MlErr::SizeMismatch {
                what: "input features",
                got: x.ncols(),
                expected: self.input,
            });
        }

        let mut rest = params;
        let mut y = x.to_owned();

        for layer in &self.layers {
            let (layer_params, tail) = rest.split_at(layer.size());
            rest = tail;
            y = layer.forward(layer_params, y.view())?;
        }

        Ok(y)
    }

    /// Describes every node of the graph, starting with the input.
    pub fn topology(&self) -> Vec<LayerSummary> {
        let input = LayerSummary {
            kind: LayerKind::Input,
            units: self.input,
            act_fn: None,
            params: 0,
        };

        let layers = self.layers.iter().map(|layer| LayerSummary {
            kind: LayerKind::Dense,
            units: layer.dim().1,
            act_fn: layer.act_fn().map(|a| a.spec()),
            params: layer.size(),
        });

        std::iter::once(input).chain(layers).collect()
    }

    pub fn spec(&self) -> ModelSpec {
        ModelSpec::Sequential {
            input: self.input,
            layers: self.layers.iter().map(Layer::spec).collect(),
        }
    }
}

impl TryFrom<&ModelSpec> for Sequential {
    type Error = MlErr;

    fn try_from(spec: &ModelSpec) -> Result<Self> {
        let ModelSpec::Sequential { input, layers } = spec;

        if layers.is_empty() {
            return Err(MlErr::InvalidSpec(
                "model must have at least one layer".into(),
            ));
        }

        let mut prev = *input;
        for (i, layer) in layers.iter().enumerate() {
            if layer.input != prev {
                return Err(MlErr::InvalidSpec(format!(
                    "layer {i}: input size ({}) does not match previous output size ({prev})",
                    layer.input
                )));
            }
            prev = layer.output;
        }

        Ok(Sequential::new(*input, layers.iter().map(Layer::from)))
    }
}
