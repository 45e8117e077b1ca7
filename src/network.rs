use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use ndarray_rand::{
    rand::{thread_rng, Rng},
    rand_distr::{Distribution, Normal},
};
use tracing::debug;

use crate::{
    error::{Error, Result},
    layer::{HiddenLayer, InputLayer, Layer, OutputLayer},
    neuron::Neuron,
};

/// Fully connected feed-forward network with tanh on every non-input layer, trained online one
/// sample at a time.
///
/// A training step is three sequential phases sharing the neurons' state:
/// [`Network::forward_propagation`] stores activations, [`Network::back_propagation`] reads them
/// to compute gradients, and [`Network::update_weights_and_biases`] reads both.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    topology: Vec<usize>,
    learning_rate: f64,
}

impl Network {
    /// Build a network whose `i`-th layer has `topology[i]` neurons, initialized from the thread
    /// RNG.
    pub fn new(topology: &[usize], learning_rate: f64) -> Result<Self> {
        Self::with_rng(topology, learning_rate, &mut thread_rng())
    }

    /// Same as [`Network::new`] but draws the initial parameters from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        topology: &[usize],
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if topology.len() < 2 {
            return Err(Error::TopologyTooShort {
                len: topology.len(),
            });
        }
        if let Some(index) = topology.iter().position(|&n| n == 0) {
            return Err(Error::EmptyLayer { index });
        }
        if !learning_rate.is_finite() {
            return Err(Error::NonFiniteLearningRate(learning_rate));
        }

        let last = topology.len() - 1;
        let layers = topology
            .iter()
            .enumerate()
            .map(|(i, &n)| match i {
                0 => Layer::Input(InputLayer::new(n)),
                i if i == last => Layer::Output(OutputLayer::new(n)),
                _ => Layer::Hidden(HiddenLayer::new(n)),
            })
            .collect();

        let mut network = Self {
            layers,
            topology: topology.to_vec(),
            learning_rate,
        };
        network.initialize_weights_and_biases(rng);
        debug!(
            topology = ?network.topology,
            learning_rate,
            parameters = network.parameter_count(),
            "built network"
        );
        Ok(network)
    }

    // Glorot-style init: N(0, sqrt(2 / (fan_in + fan_out))) for every weight and bias.
    fn initialize_weights_and_biases<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 1..self.layers.len() {
            let fan_in = self.topology[i - 1];
            let fan_out = self.topology[i];
            let std_dev = (2.0 / (fan_in + fan_out) as f64).sqrt();
            let dist = Normal::new(0.0, std_dev).expect("fan-in and fan-out are both at least 1");

            for neuron in self.layers[i].neurons_mut() {
                neuron.set_bias(dist.sample(rng));
                let weights = (0..fan_in).map(|_| dist.sample(rng)).collect();
                neuron.init_weights(weights);
            }
        }
    }

    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Mutable access to one layer's neurons, e.g. to set parameters by hand.
    /// Only a slice is handed out, so layers and neuron counts stay as built, and
    /// [`Neuron::set_weights`] refuses to change a weight count.
    pub fn layer_neurons_mut(&mut self, index: usize) -> Option<&mut [Neuron]> {
        self.layers.get_mut(index).map(Layer::neurons_mut)
    }

    pub fn input_layer(&self) -> &InputLayer {
        match self.layers.first() {
            Some(Layer::Input(layer)) => layer,
            _ => unreachable!("the first layer is always the input layer"),
        }
    }

    pub fn output_layer(&self) -> &OutputLayer {
        match self.layers.last() {
            Some(Layer::Output(layer)) => layer,
            _ => unreachable!("the last layer is always the output layer"),
        }
    }

    fn input_layer_mut(&mut self) -> &mut InputLayer {
        match self.layers.first_mut() {
            Some(Layer::Input(layer)) => layer,
            _ => unreachable!("the first layer is always the input layer"),
        }
    }

    fn output_layer_mut(&mut self) -> &mut OutputLayer {
        match self.layers.last_mut() {
            Some(Layer::Output(layer)) => layer,
            _ => unreachable!("the last layer is always the output layer"),
        }
    }

    /// Number of trainable weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.topology
            .windows(2)
            .map(|pair| (pair[0] + 1) * pair[1])
            .sum()
    }

    /// Load `input` and recompute every activation from the input layer to the output layer.
    pub fn forward_propagation(&mut self, input: ArrayView1<f64>) -> Result<()> {
        self.input_layer_mut().load_input(input)?;
        for i in 1..self.layers.len() {
            let (before, rest) = self.layers.split_at_mut(i);
            rest[0].forward(&before[i - 1]);
        }
        Ok(())
    }

    /// Compute gradients for `target` from the output layer back to the first hidden layer.
    /// Relies on the activations of the preceding [`Network::forward_propagation`].
    pub fn back_propagation(&mut self, target: ArrayView1<f64>) -> Result<()> {
        self.output_layer_mut().load_target(target)?;
        for i in (1..self.layers.len() - 1).rev() {
            let (before, after) = self.layers.split_at_mut(i + 1);
            before[i].backward(&after[0]);
        }
        Ok(())
    }

    /// Apply the gradients of the preceding [`Network::back_propagation`].
    ///
    /// Gradients are built from `target - prediction`, so parameters move by `+lr * gradient`;
    /// this is descent on the squared error.
    pub fn update_weights_and_biases(&mut self) {
        let learning_rate = self.learning_rate;
        for i in 1..self.layers.len() {
            let (before, rest) = self.layers.split_at_mut(i);
            let previous = before[i - 1].neurons();
            for neuron in rest[0].neurons_mut() {
                let step = learning_rate * neuron.gradient();
                for (weight, p) in neuron.weights_mut().iter_mut().zip(previous.iter()) {
                    *weight += step * p.activation();
                }
                neuron.set_bias(neuron.bias() + step);
            }
        }
    }

    /// Run a forward pass and return a copy of the output activations.
    /// Overwrites the neurons' state, so it must not race with a training step.
    pub fn predict(&mut self, input: ArrayView1<f64>) -> Result<Array1<f64>> {
        self.forward_propagation(input)?;
        Ok(self.output_layer().activations().collect())
    }

    /// Predict every row of `inputs`.
    pub fn predict_batch(&mut self, inputs: ArrayView2<f64>) -> Result<Array2<f64>> {
        let n_outputs = self.output_layer_len();
        let mut outputs = Array2::zeros((inputs.nrows(), n_outputs));
        for (input, mut output) in inputs
            .axis_iter(Axis(0))
            .zip(outputs.axis_iter_mut(Axis(0)))
        {
            output.assign(&self.predict(input)?);
        }
        Ok(outputs)
    }

    /// `sum(0.5 * (target[i] - activation[i])^2)` over the output layer, using whatever
    /// activations the last forward pass stored.
    pub fn calculate_error(&self, target: ArrayView1<f64>) -> Result<f64> {
        let expected = self.output_layer_len();
        if target.len() != expected {
            return Err(Error::DimensionMismatch {
                layer: "output layer",
                expected,
                actual: target.len(),
            });
        }
        Ok(self
            .output_layer()
            .activations()
            .zip(target.iter())
            .map(|(a, t)| 0.5 * (t - a).powi(2))
            .sum())
    }

    /// One online training step: forward, backward, update. Returns the sample's error measured
    /// before the update.
    pub fn train_sample(&mut self, input: ArrayView1<f64>, target: ArrayView1<f64>) -> Result<f64> {
        self.forward_propagation(input)?;
        self.back_propagation(target)?;
        self.update_weights_and_biases();
        self.calculate_error(target)
    }

    fn output_layer_len(&self) -> usize {
        self.topology[self.topology.len() - 1]
    }
}
