use std::{
    env,
    fs::File,
    io::{self, BufReader, Write},
    process,
};

use anyhow::{Context, Result, bail};
use log::info;
use machine_learning::factory::INPUT_FEATURES;
use ndarray::Array2;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <model [features] | preprocess <capture.jsonl>>",
            args[0]
        );
        process::exit(1);
    }

    let ret = match args[1].as_str() {
        "model" => model(args.get(2).map(String::as_str)),
        "preprocess" => match args.get(2) {
            Some(path) => preprocess(path),
            None => {
                eprintln!("Usage: {} preprocess <capture.jsonl>", args[0]);
                process::exit(1);
            }
        },
        mode => {
            eprintln!("Unknown mode: {mode}. You must use 'model' or 'preprocess'.");
            process::exit(1);
        }
    };

    if let Err(e) = ret {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Prints the lab model's spec and topology, and its prediction when features are given.
fn model(features: Option<&str>) -> Result<()> {
    let model = machine_learning::get_model();

    let mut report = serde_json::json!({
        "spec": model.spec(),
        "topology": model.topology(),
        "params": model.size(),
    });

    if let Some(features) = features {
        let x = parse_features(features)?;
        let y = model.predict(x.view())?;
        report["prediction"] = serde_json::json!(y[[0, 0]]);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_features(features: &str) -> Result<Array2<f32>> {
    let values = features
        .split(',')
        .map(|v| v.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("invalid features `{features}`"))?;

    if values.len() != INPUT_FEATURES {
        bail!(
            "expected {INPUT_FEATURES} features, got {}",
            values.len()
        );
    }

    Ok(Array2::from_shape_vec((1, INPUT_FEATURES), values)?)
}

/// Writes one reshaped record per capture line, stopping at the first failing line.
fn preprocess(path: &str) -> Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let mut stdout = io::stdout().lock();
    let mut count = 0;

    for record in monitor::reshape_capture(BufReader::new(file)) {
        let record = record.with_context(|| format!("failed to preprocess {path}"))?;
        serde_json::to_writer(&mut stdout, &record)?;
        writeln!(stdout)?;
        count += 1;
    }

    info!("reshaped {count} records from {path}");
    Ok(())
}
