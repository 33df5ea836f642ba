use log::info;
use rand::Rng;

use crate::arch::{Model, Sequential, activations::ActFn, layers::Layer};

/// Amount of features every sample of the lab model takes.
pub const INPUT_FEATURES: usize = 8;

/// Builds the fixed topology of the lab model: 8 inputs, a dense tanh layer of 8 units, a dense
/// sigmoid layer of 4 units and a single linear output.
pub fn topology() -> Sequential {
    Sequential::new(
        INPUT_FEATURES,
        [
            Layer::dense((INPUT_FEATURES, 8), Some(ActFn::tanh())),
            Layer::dense((8, 4), Some(ActFn::sigmoid(1.))),
            Layer::dense((4, 1), None),
        ],
    )
}

/// Builds the lab model with parameters sampled from the thread local generator.
pub fn get_model() -> Model {
    get_model_with_rng(&mut rand::rng())
}

/// Builds the lab model with parameters sampled from `rng`.
pub fn get_model_with_rng<R: Rng>(rng: &mut R) -> Model {
    let model = match Model::init(topology(), rng) {
        Ok(model) => model,
        // Every layer of the fixed topology has a positive fan, so the Xavier range is valid.
        Err(e) => unreachable!("lab topology failed to initialize: {e}"),
    };

    info!(
        "built lab model with {} layers and {} parameters",
        model.topology().len(),
        model.size()
    );
    model
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn same_seed_same_params() {
        let a = get_model_with_rng(&mut StdRng::seed_from_u64(3));
        let b = get_model_with_rng(&mut StdRng::seed_from_u64(3));
        assert_eq!(a.params(), b.params());
    }

    #[test]
    fn biases_start_at_zero() {
        let model = get_model_with_rng(&mut StdRng::seed_from_u64(3));
        let params = model.params();

        // Each dense layer ends with its biases.
        assert!(params[64..72].iter().all(|&b| b == 0.));
        assert!(params[104..108].iter().all(|&b| b == 0.));
        assert_eq!(params[112], 0.);
    }
}
