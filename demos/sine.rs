use std::f64::consts::PI;

use anyhow::Result;
use ndarray::{Array, Axis};
use tanhnet::{
    metrics::mean_squared_error,
    train::{fit, TrainConfig},
    Network,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 50 points evenly spaced over [-pi, pi).
    let n_samples = 50;
    let inputs = Array::from_shape_fn((n_samples, 1), |(i, _)| {
        -PI + i as f64 * (2.0 * PI / n_samples as f64)
    });
    let targets = inputs.mapv(f64::sin);

    let mut network = Network::new(&[1, 6, 1], 0.01)?;
    let config = TrainConfig::default().epochs(10000).log_interval(500);
    fit(&mut network, inputs.view(), targets.view(), &config)?;

    println!("sine approximation results:");
    for i in (0..n_samples).step_by(5) {
        let output = network.predict(inputs.index_axis(Axis(0), i))?;
        println!(
            "input: {:.4}, predicted: {:.4}, target: {:.4}",
            inputs[[i, 0]],
            output[0],
            targets[[i, 0]]
        );
    }

    let predictions = network.predict_batch(inputs.view())?;
    println!(
        "mse: {}",
        mean_squared_error(targets.view(), predictions.view())?
    );
    Ok(())
}
