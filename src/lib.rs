use std::collections::HashMap;

use ndarray::{Array2, ArrayView2, Axis};

pub mod data;
pub mod error;
pub mod layer;
pub mod metrics;
pub mod network;
pub mod neuron;
pub mod train;
pub mod utils;

pub use error::{Error, Result};
pub use network::Network;

#[macro_export]
macro_rules! assert_rel_eq_arr1 {
    ($actual:expr, $expected:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w);
            });
    };
}

#[macro_export]
macro_rules! assert_rel_eq_arr2 {
    ($actual:expr, $expected:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w);
            });
    };
}

/// Encode labels to one-hot target rows and decode network outputs back to labels.
pub struct OneHotEncoder {
    label_to_id: HashMap<String, usize>,
    id_to_label: Vec<String>,
}

impl OneHotEncoder {
    /// Record labels to convert. The position in `label_kinds` decides the hot column.
    pub fn new(label_kinds: &[String]) -> Self {
        let label_to_id = label_kinds
            .iter()
            .cloned()
            .enumerate()
            .map(|(id, label)| (label, id))
            .collect();
        Self {
            label_to_id,
            id_to_label: label_kinds.to_vec(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.id_to_label
    }

    /// Encode labels to one-hot vectors as 2D matrix whose shape is (n_data, n_labels).
    pub fn encode(&self, labels: &[String]) -> Result<Array2<f64>> {
        let n_labels = self.id_to_label.len();
        let mut one_hot = Array2::zeros((labels.len(), n_labels));
        for (mut row, label) in one_hot.axis_iter_mut(Axis(0)).zip(labels) {
            let id = self
                .label_to_id
                .get(label)
                .ok_or_else(|| Error::UnknownLabel(label.clone()))?;
            row[*id] = 1.0;
        }
        Ok(one_hot)
    }

    /// Decode rows to labels by taking the argmax of each row.
    /// This works on raw tanh outputs as well as on exact one-hot rows.
    pub fn decode(&self, outputs: ArrayView2<f64>) -> Vec<String> {
        outputs
            .axis_iter(Axis(0))
            .map(|row| {
                row.iter()
                    .enumerate()
                    .fold((0, f64::NEG_INFINITY), |(max_index, max_elem), (index, &elem)| {
                        if elem > max_elem {
                            (index, elem)
                        } else {
                            (max_index, max_elem)
                        }
                    })
                    .0
            })
            .map(|id| self.id_to_label[id].clone())
            .collect()
    }
}
