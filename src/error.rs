use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("topology needs at least 2 layers, got {len}")]
    TopologyTooShort { len: usize },

    #[error("layer {index} of the topology has no neurons")]
    EmptyLayer { index: usize },

    #[error("learning rate must be finite, got {0}")]
    NonFiniteLearningRate(f64),

    /// A vector handed to a layer (or a row handed to a helper) has the wrong length.
    #[error("{layer}: expected {expected} values, got {actual}")]
    DimensionMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{inputs} input rows but {targets} target rows")]
    RowCountMismatch { inputs: usize, targets: usize },

    #[error("shapes differ: {expected:?} vs {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("test ratio must lie in [0, 1], got {0}")]
    InvalidRatio(f64),

    #[error("label column {column} is out of range for rows with {n_columns} columns")]
    LabelColumnOutOfRange { column: usize, n_columns: usize },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown label {0:?}")]
    UnknownLabel(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
