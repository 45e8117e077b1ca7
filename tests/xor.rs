use ndarray::{arr2, Array2};
use ndarray_rand::rand::{rngs::StdRng, SeedableRng};
use tanhnet::{
    train::{fit, TrainConfig},
    Network,
};

fn xor_data() -> (Array2<f64>, Array2<f64>) {
    let inputs = arr2(&[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
    let targets = arr2(&[[0.0], [1.0], [1.0], [0.0]]);
    (inputs, targets)
}

fn train_xor(seed: u64, learning_rate: f64, epochs: usize) -> (Network, Vec<f64>) {
    let (inputs, targets) = xor_data();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::with_rng(&[2, 4, 1], learning_rate, &mut rng).unwrap();
    let config = TrainConfig::default().epochs(epochs).log_interval(500);
    let history = fit(&mut network, inputs.view(), targets.view(), &config).unwrap();
    (network, history)
}

#[test]
fn xor_error_decreases() {
    for seed in 0..5 {
        let (_, history) = train_xor(seed, 0.01, 6000);
        assert_eq!(6000, history.len());
        let first = history[0];
        let last = history[history.len() - 1];
        assert!(last < first, "seed {}: {} -> {}", seed, first, last);
    }
}

#[test]
fn xor_converges() {
    for seed in 0..5 {
        let (_, history) = train_xor(seed, 0.01, 6000);
        let last = history[history.len() - 1];
        assert!(last < 0.05, "seed {}: final error {}", seed, last);
    }
}

#[test]
fn xor_predictions_separate_classes() {
    let (inputs, targets) = xor_data();
    for seed in 0..3 {
        let (mut network, history) = train_xor(seed, 0.01, 6000);
        assert!(history[history.len() - 1] < 0.05);

        let outputs = network.predict_batch(inputs.view()).unwrap();
        assert_eq!(targets.shape(), outputs.shape());
        let ones = outputs[[1, 0]].min(outputs[[2, 0]]);
        let zeros = outputs[[0, 0]].max(outputs[[3, 0]]);
        assert!(ones > zeros, "seed {}: {}", seed, outputs);
    }
}
