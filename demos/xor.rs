use anyhow::Result;
use ndarray::{arr2, Axis};
use tanhnet::{
    train::{fit, TrainConfig},
    Network,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let inputs = arr2(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
    let targets = arr2(&[[0.0], [1.0], [1.0], [0.0]]);

    let mut network = Network::new(&[2, 4, 1], 0.01)?;
    let config = TrainConfig::default().epochs(6000).log_interval(500);
    let history = fit(&mut network, inputs.view(), targets.view(), &config)?;
    println!("final error: {}", history.last().copied().unwrap_or_default());

    println!("XOR test results:");
    for (input, target) in inputs.axis_iter(Axis(0)).zip(targets.axis_iter(Axis(0))) {
        let output = network.predict(input)?;
        println!(
            "input: {}, predicted: {:.4}, target: {}",
            input, output[0], target[0]
        );
    }
    Ok(())
}
