use ndarray::prelude::*;

use crate::{MlErr, Result, arch::activations::ActFn};

/// A fully connected layer, `act_fn(x . w + b)`.
///
/// The layer doesn't own its parameters, it views a slice of `(n + 1) * m` values laid out as a
/// row-major `n x m` weight matrix followed by `m` biases.
#[derive(Clone, Debug)]
pub struct Dense {
    dim: (usize, usize),
    act_fn: Option<ActFn>,
    size: usize,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `dim` - The input and output widths of the layer.
    /// * `act_fn` - The activation function, `None` for a linear output.
    ///
    /// # Returns
    /// A new `Dense` instance.
    pub fn new(dim: (usize, usize), act_fn: Option<ActFn>) -> Self {
        Self {
            dim,
            size: (dim.0 + 1) * dim.1,
            act_fn,
        }
    }

    /// Returns the size of this layer.
    ///
    /// # Returns
    /// The amount of parameters this layer has.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn act_fn(&self) -> Option<&ActFn> {
        self.act_fn.as_ref()
    }

    /// Makes a forward pass through the layer.
    ///
    /// # Arguments
    /// * `params` - This layer's slice of parameters.
    /// * `x` - A batch of rows, each `dim.0` wide.
    ///
    /// # Returns
    /// The activations, one row of width `dim.1` per input row, or an error on a shape mismatch.
    pub fn forward(&self, params: &[f32], x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.dim.0 {
            return Err(MlErr::SizeMismatch {
                what: "dense input",
                got: x.ncols(),
                expected: self.dim.0,
            });
        }

        let (w, b) = self.view_params(params)?;
        let z = x.dot(&w) + &b;

        let Some(ref act_fn) = self.act_fn else {
            return Ok(z);
        };

        Ok(z.mapv_into(|z| act_fn.f(z)))
    }

    /// Gives a view of the raw parameter slice as the weights and biases of this layer.
    ///
    /// # Arguments
    /// * `params` - A slice of parameters.
    ///
    /// # Returns
    /// A tuple containing the weights and biases.
    fn view_params<'a>(
        &self,
        params: &'a [f32],
    ) -> Result<(ArrayView2<'a, f32>, ArrayView1<'a, f32>)> {
        if params.len() != self.size {
            return Err(MlErr::SizeMismatch {
                what: "dense parameters",
                got: params.len(),
                expected: self.size,
            });
        }

        let w_size = self.size - self.dim.1;
        let (w_raw, b_raw) = params.split_at(w_size);

        // Lengths were checked above, so the shapes always fit.
        let weights = ArrayView2::from_shape(self.dim, w_raw).map_err(|_| MlErr::SizeMismatch {
            what: "dense weights",
            got: w_raw.len(),
            expected: w_size,
        })?;
        let biases = ArrayView1::from(b_raw);
        Ok((weights, biases))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn size_counts_weights_and_biases() {
        assert_eq!(Dense::new((8, 4), None).size(), 36);
        assert_eq!(Dense::new((4, 1), None).size(), 5);
    }

    #[test]
    fn linear_forward() {
        let dense = Dense::new((2, 1), None);
        // w = [[1], [2]], b = [0.5]
        let params = [1., 2., 0.5];
        let x = array![[1., 1.], [3., -1.]];

        let y = dense.forward(&params, x.view()).unwrap();
        assert_eq!(y, array![[3.5], [1.5]]);
    }

    #[test]
    fn activated_forward() {
        let dense = Dense::new((1, 2), Some(ActFn::tanh()));
        let params = [0., 0., 0., 0.];
        let x = array![[5.]];

        let y = dense.forward(&params, x.view()).unwrap();
        assert_eq!(y, array![[0., 0.]]);
    }

    #[test]
    fn wrong_input_width() {
        let dense = Dense::new((3, 1), None);
        let x = array![[1., 2.]];

        let err = dense.forward(&[0.; 4], x.view()).unwrap_err();
        assert!(matches!(
            err,
            MlErr::SizeMismatch {
                got: 2,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn wrong_params_length() {
        let dense = Dense::new((1, 1), None);
        let x = array![[1.]];

        assert!(dense.forward(&[0.; 3], x.view()).is_err());
    }
}
