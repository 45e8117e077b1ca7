use ndarray::ArrayView1;

use crate::{
    error::{Error, Result},
    neuron::Neuron,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// Layer that receives the raw input vector. It has no trainable parameters.
#[derive(Debug, Clone)]
pub struct InputLayer {
    neurons: Vec<Neuron>,
}

impl InputLayer {
    pub fn new(n_neurons: usize) -> Self {
        Self {
            neurons: vec![Neuron::new(); n_neurons],
        }
    }

    /// Copy `input[i]` into both the value and the activation of neuron `i`.
    /// Downstream layers read activations, so both have to be set.
    pub fn load_input(&mut self, input: ArrayView1<f64>) -> Result<()> {
        check_len("input layer", self.neurons.len(), input.len())?;
        for (neuron, &x) in self.neurons.iter_mut().zip(input.iter()) {
            neuron.set_value(x);
            neuron.set_activation(x);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct HiddenLayer {
    neurons: Vec<Neuron>,
}

impl HiddenLayer {
    pub fn new(n_neurons: usize) -> Self {
        Self {
            neurons: vec![Neuron::new(); n_neurons],
        }
    }

    pub fn forward(&mut self, previous: &[Neuron]) {
        activate(&mut self.neurons, previous);
    }

    /// Compute gradients from the successor's gradients and the weights pointing back at this layer.
    pub fn backward(&mut self, next: &[Neuron]) {
        for (i, neuron) in self.neurons.iter_mut().enumerate() {
            let downstream = next
                .iter()
                .fold(0.0, |sum, n| sum + n.weights()[i] * n.gradient());
            neuron.set_gradient(downstream * Neuron::tanh_derivative(neuron.activation()));
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputLayer {
    neurons: Vec<Neuron>,
}

impl OutputLayer {
    pub fn new(n_neurons: usize) -> Self {
        Self {
            neurons: vec![Neuron::new(); n_neurons],
        }
    }

    pub fn forward(&mut self, previous: &[Neuron]) {
        activate(&mut self.neurons, previous);
    }

    /// Seed the backward pass: `gradient = (target - activation) * tanh'(activation)`.
    pub fn load_target(&mut self, target: ArrayView1<f64>) -> Result<()> {
        check_len("output layer", self.neurons.len(), target.len())?;
        for (neuron, &t) in self.neurons.iter_mut().zip(target.iter()) {
            let error = t - neuron.activation();
            neuron.set_gradient(error * Neuron::tanh_derivative(neuron.activation()));
        }
        Ok(())
    }

    pub fn activations(&self) -> impl Iterator<Item = f64> + '_ {
        self.neurons.iter().map(Neuron::activation)
    }
}

/// One layer of a [`Network`](crate::network::Network).
///
/// Layers do not point at their neighbours; the network owns all of them in order and hands the
/// adjacent layer's neurons in when calling [`Layer::forward`] or [`Layer::backward`].
#[derive(Debug, Clone)]
pub enum Layer {
    Input(InputLayer),
    Hidden(HiddenLayer),
    Output(OutputLayer),
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Self::Input(_) => LayerKind::Input,
            Self::Hidden(_) => LayerKind::Hidden,
            Self::Output(_) => LayerKind::Output,
        }
    }

    pub fn neurons(&self) -> &[Neuron] {
        match self {
            Self::Input(layer) => &layer.neurons,
            Self::Hidden(layer) => &layer.neurons,
            Self::Output(layer) => &layer.neurons,
        }
    }

    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        match self {
            Self::Input(layer) => &mut layer.neurons,
            Self::Hidden(layer) => &mut layer.neurons,
            Self::Output(layer) => &mut layer.neurons,
        }
    }

    pub fn len(&self) -> usize {
        self.neurons().len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons().is_empty()
    }

    /// Recompute activations from the preceding layer. The input layer is fed through
    /// [`InputLayer::load_input`] instead, so this is a no-op for it.
    pub fn forward(&mut self, previous: &Layer) {
        match self {
            Self::Input(_) => {}
            Self::Hidden(layer) => layer.forward(previous.neurons()),
            Self::Output(layer) => layer.forward(previous.neurons()),
        }
    }

    /// Recompute gradients from the following layer. Only hidden layers do anything here: the
    /// input layer has no parameters and the output layer is driven by
    /// [`OutputLayer::load_target`].
    pub fn backward(&mut self, next: &Layer) {
        if let Self::Hidden(layer) = self {
            layer.backward(next.neurons());
        }
    }
}

fn check_len(layer: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            layer,
            expected,
            actual,
        })
    }
}

// Shared forward step of hidden and output layers.
fn activate(neurons: &mut [Neuron], previous: &[Neuron]) {
    for neuron in neurons.iter_mut() {
        let sum = neuron
            .weights()
            .iter()
            .zip(previous.iter())
            .fold(neuron.bias(), |sum, (w, p)| sum + w * p.activation());
        neuron.set_value(sum);
        neuron.set_activation(Neuron::tanh_activation(sum));
    }
}
