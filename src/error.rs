//! Error types shared by the automaton engine and the perceptron trainer.

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Grid is empty, has the wrong number of cells, or holds a value outside {0, 1}
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// A sample's feature vector does not match the weight vector length
    #[error("Sample {index} has {found} features, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A sample's expected label is not 0 or 1
    #[error("Sample {index} has label {label}, expected 0 or 1")]
    InvalidLabel { index: usize, label: u8 },

    /// A feature vector passed for prediction does not match the weight vector length
    #[error("Feature vector has {found} values, expected {expected}")]
    FeatureLengthMismatch { expected: usize, found: usize },

    /// Hyperparameter outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pattern file content could not be turned into a grid
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tensor data could not be read back from the backend
    #[error("Tensor error: {0}")]
    Tensor(String),
}
