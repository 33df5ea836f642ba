use machine_learning::{
    arch::{LayerKind, Sequential},
    get_model, get_model_with_rng,
    specs::{ActFnSpec, ModelSpec},
    MlErr,
};
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn lab_model_has_fixed_topology() {
    let model = get_model();
    let topology = model.topology();

    assert_eq!(topology.len(), 4);

    let units: Vec<_> = topology.iter().map(|l| l.units).collect();
    assert_eq!(units, [8, 8, 4, 1]);

    let act_fns: Vec<_> = topology.iter().map(|l| l.act_fn).collect();
    assert_eq!(
        act_fns,
        [
            None,
            Some(ActFnSpec::Tanh),
            Some(ActFnSpec::Sigmoid { amp: 1. }),
            None
        ]
    );

    assert_eq!(topology[0].kind, LayerKind::Input);
    assert!(topology[1..].iter().all(|l| l.kind == LayerKind::Dense));
}

#[test]
fn lab_model_parameter_count() {
    let model = get_model();
    let params: Vec<_> = model.topology().iter().map(|l| l.params).collect();

    assert_eq!(params, [0, 72, 36, 5]);
    assert_eq!(model.size(), 113);
    assert_eq!(model.sequential().size(), 113);
}

#[test]
fn lab_model_predicts_one_value_per_row() {
    let model = get_model_with_rng(&mut StdRng::seed_from_u64(11));
    let x = Array2::from_shape_fn((5, 8), |(i, j)| (i * 8 + j) as f32 / 40.);

    let y = model.predict(x.view()).unwrap();
    assert_eq!(y.dim(), (5, 1));
    assert!(y.iter().all(|v| v.is_finite()));
}

#[test]
fn lab_model_is_bounded_by_sigmoid_layer() {
    // The output is a linear combination of 4 values in (0, 1) with Xavier weights in
    // (-sqrt(6/5), sqrt(6/5)) and a zero bias.
    let model = get_model_with_rng(&mut StdRng::seed_from_u64(5));
    let x = Array2::from_elem((1, 8), 100.);

    let y = model.predict(x.view()).unwrap();
    let bound = 4. * (6f32 / 5.).sqrt();
    assert!(y[[0, 0]].abs() <= bound);
}

#[test]
fn lab_model_rejects_wrong_feature_count() {
    let model = get_model();
    let x = Array2::<f32>::zeros((1, 7));

    assert!(matches!(
        model.predict(x.view()),
        Err(MlErr::SizeMismatch {
            got: 7,
            expected: 8,
            ..
        })
    ));
}

#[test]
fn lab_model_spec_serializes() {
    let spec = get_model().spec();
    let json = serde_json::to_value(&spec).unwrap();

    assert_eq!(json["sequential"]["input"], 8);
    assert_eq!(json["sequential"]["layers"][0]["act_fn"], "tanh");
    assert_eq!(json["sequential"]["layers"][1]["act_fn"]["sigmoid"]["amp"], 1.0);
    assert!(json["sequential"]["layers"][2]["act_fn"].is_null());

    let back: ModelSpec = serde_json::from_value(json).unwrap();
    assert_eq!(back, spec);
    assert!(Sequential::try_from(&back).is_ok());
}
