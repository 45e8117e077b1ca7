use std::fs;

use approx::assert_relative_eq;
use ndarray::{s, Axis};
use ndarray_rand::rand::{rngs::StdRng, SeedableRng};
use tanhnet::{
    data::{load_csv, normalize_input, normalize_matrix},
    train::{fit, TrainConfig},
    Network,
};
use tempfile::tempdir;

#[test]
fn csv_to_trained_network() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("line.csv");
    let mut contents = String::from("x,y\n");
    for i in 0..20 {
        let x = i as f64;
        contents.push_str(&format!("{},{}\n", x, 3.0 * x + 1.0));
    }
    contents.push_str("bad,row\n");
    fs::write(&path, contents).unwrap();

    let table = load_csv(&path, true).unwrap();
    assert_eq!(&[20, 2], table.shape());

    let normalized = normalize_matrix(table.view());
    let inputs = normalized.slice(s![.., 0..1]);
    let targets = normalized.slice(s![.., 1..2]);

    let mut rng = StdRng::seed_from_u64(11);
    let mut network = Network::with_rng(&[1, 5, 1], 0.05, &mut rng).unwrap();
    let config = TrainConfig::default().epochs(500).log_interval(0);
    let history = fit(&mut network, inputs, targets, &config).unwrap();
    assert!(history[499] < history[0]);

    let row = table.index_axis(Axis(0), 7);
    let scaled = normalize_input(row, table.view()).unwrap();
    assert_relative_eq!(normalized[[7, 0]], scaled[0]);
    assert_relative_eq!(normalized[[7, 1]], scaled[1]);

    let prediction = network.predict(scaled.slice(s![0..1])).unwrap();
    assert_eq!(1, prediction.len());
    assert!(prediction[0].is_finite());
}
