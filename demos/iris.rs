use std::env;

use anyhow::{Context, Result};
use ndarray_rand::rand::thread_rng;
use tanhnet::{
    data::{load_labeled_csv, normalize_matrix},
    metrics::{accuracy, confusion_matrix},
    train::{fit, TrainConfig},
    utils::train_test_split,
    Network, OneHotEncoder,
};

// Load iris dataset available here: https://www.kaggle.com/arshid/iris-flower-dataset
// Usage: cargo run --example iris -- path/to/IRIS.csv
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "IRIS.csv".to_string());
    let (features, species) = load_labeled_csv(&path, true, 4)
        .with_context(|| format!("failed to load {}", path))?;

    let labels = vec!["Iris-setosa", "Iris-versicolor", "Iris-virginica"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    let encoder = OneHotEncoder::new(&labels);

    let x = normalize_matrix(features.view());
    let y = encoder.encode(&species)?;
    let (x_train, y_train, x_test, y_test) =
        train_test_split(x.view(), y.view(), 0.25, &mut thread_rng())?;

    let mut network = Network::new(&[4, 8, 3], 0.01)?;
    let config = TrainConfig::default().epochs(1000).log_interval(100);
    fit(&mut network, x_train.view(), y_train.view(), &config)?;

    let y_pred = encoder.decode(network.predict_batch(x_test.view())?.view());
    let y_true = encoder.decode(y_test.view());

    println!("accuracy: {}", accuracy(&y_true, &y_pred));
    println!("{:?}", confusion_matrix(&y_true, &y_pred, &labels));
    Ok(())
}
