use ndarray::{ArrayView2, Axis};
use tracing::info;

use crate::{
    error::{Error, Result},
    network::Network,
};

/// Settings of the online training loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    /// Log the mean error every `log_interval` epochs. 0 turns progress logging off.
    pub log_interval: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 1000,
            log_interval: 500,
        }
    }
}

impl TrainConfig {
    pub fn epochs(self, epochs: usize) -> Self {
        Self { epochs, ..self }
    }

    pub fn log_interval(self, log_interval: usize) -> Self {
        Self {
            log_interval,
            ..self
        }
    }
}

/// Train `network` one sample at a time, visiting the rows of `inputs` and `targets` in dataset
/// order every epoch.
///
/// Returns the mean per-sample error of each epoch.
pub fn fit(
    network: &mut Network,
    inputs: ArrayView2<f64>,
    targets: ArrayView2<f64>,
    config: &TrainConfig,
) -> Result<Vec<f64>> {
    if inputs.nrows() != targets.nrows() {
        return Err(Error::RowCountMismatch {
            inputs: inputs.nrows(),
            targets: targets.nrows(),
        });
    }

    let n_samples = inputs.nrows().max(1) as f64;
    let mut history = Vec::with_capacity(config.epochs);
    for epoch in 0..config.epochs {
        let mut total_error = 0.0;
        for (input, target) in inputs.axis_iter(Axis(0)).zip(targets.axis_iter(Axis(0))) {
            total_error += network.train_sample(input, target)?;
        }
        let mean_error = total_error / n_samples;

        if config.log_interval > 0 && epoch % config.log_interval == 0 {
            info!(epoch, error = mean_error, "training");
        }
        history.push(mean_error);
    }
    Ok(history)
}
