use crate::error::{Error, Result};

/// A single tanh unit.
///
/// `weights[j]` connects this neuron to neuron `j` of the preceding layer, so neurons of the
/// input layer carry no weights at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neuron {
    value: f64,
    bias: f64,
    activation: f64,
    gradient: f64,
    weights: Vec<f64>,
}

impl Neuron {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weighted input sum computed in the last forward pass (or the raw input for the input layer).
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    pub fn activation(&self) -> f64 {
        self.activation
    }

    pub fn set_activation(&mut self, activation: f64) {
        self.activation = activation;
    }

    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub fn set_gradient(&mut self, gradient: f64) {
        self.gradient = gradient;
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable access to the weights. The slice cannot be resized, which keeps the weight count
    /// equal to the size of the preceding layer.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Copy `weights` in. The weight count is fixed when the network is built, so a slice of a
    /// different length is rejected.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        if weights.len() != self.weights.len() {
            return Err(Error::DimensionMismatch {
                layer: "neuron weights",
                expected: self.weights.len(),
                actual: weights.len(),
            });
        }
        self.weights.copy_from_slice(weights);
        Ok(())
    }

    pub(crate) fn init_weights(&mut self, weights: Vec<f64>) {
        self.weights = weights;
    }

    pub fn tanh_activation(x: f64) -> f64 {
        x.tanh()
    }

    /// Derivative of tanh expressed through its output.
    /// `activation` must already be `tanh(x)`, so this returns `1 - tanh(x)^2`.
    pub fn tanh_derivative(activation: f64) -> f64 {
        1.0 - activation * activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tanh_compute() {
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let expected = [
            -0.9640275800758169,
            -0.7615941559557649,
            0.0,
            0.7615941559557649,
            0.9640275800758169,
        ];
        for (x, e) in xs.iter().zip(expected.iter()) {
            assert_relative_eq!(*e, Neuron::tanh_activation(*x));
        }
    }

    #[test]
    fn tanh_derivative_from_activation() {
        for x in [-5.0f64, -1.0, 0.0, 1.0, 5.0] {
            let activation = Neuron::tanh_activation(x);
            let expected = 1.0 - x.tanh().powi(2);
            assert_relative_eq!(expected, Neuron::tanh_derivative(activation));
        }
    }

    #[test]
    fn tanh_derivative_at_zero_is_one() {
        assert_relative_eq!(1.0, Neuron::tanh_derivative(Neuron::tanh_activation(0.0)));
    }

    #[test]
    fn weights_are_copied_in() {
        let mut weights = vec![0.5, -0.5];
        let mut neuron = Neuron::new();
        neuron.init_weights(vec![0.0; 2]);
        neuron.set_weights(&weights).unwrap();
        weights[0] = 10.0;
        assert_eq!(&[0.5, -0.5], neuron.weights());

        neuron.weights_mut()[1] = 2.0;
        assert_eq!(&[0.5, 2.0], neuron.weights());
    }

    #[test]
    fn set_weights_keeps_length() {
        let mut neuron = Neuron::new();
        neuron.init_weights(vec![0.1, 0.2, 0.3]);
        assert!(matches!(
            neuron.set_weights(&[1.0]),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 1,
                ..
            })
        ));
        assert_eq!(&[0.1, 0.2, 0.3], neuron.weights());
    }
}
