use thiserror::Error;

/// Errors raised while validating an operator's `dims` configuration.
///
/// These are fatal: the operator is never constructed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Parameter `dims` must be provided.")]
    Empty,

    #[error("Dimension ids must be non-negative, got {axis}.")]
    NegativeAxis { axis: i64 },
}

/// Errors raised by the tensor storage collaborator.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TensorError {
    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Cannot reshape {from:?} into {to:?}: element count differs")]
    ElementCountMismatch { from: Vec<usize>, to: Vec<usize> },
}

/// Errors raised by a single operator invocation.
///
/// A failure aborts that invocation only; the operator stays usable.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RuntimeError {
    #[error("Input needs at least {required} dimensions given `dims`, got {actual}.")]
    InsufficientRank { required: usize, actual: usize },

    #[error("Dimension {axis} of input must be 1 instead of {size}.")]
    NonUnitDimension { axis: usize, size: usize },

    #[error(transparent)]
    Tensor(#[from] TensorError),
}

/// Crate-level error for the surfaces that both construct and run an operator.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AxisOpsError {
    #[error("Invalid operator configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Operator invocation failed: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("Unknown operator type: {0}")]
    UnknownOperator(String),
}

impl From<TensorError> for AxisOpsError {
    fn from(err: TensorError) -> Self {
        AxisOpsError::Runtime(RuntimeError::Tensor(err))
    }
}
