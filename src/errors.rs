use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TxnModeError {
    /// A mode value outside its closed enumeration reached the mapper.
    #[error("unknown {kind}: {value}")]
    UnknownEnumValue { kind: &'static str, value: String },

    #[error("{0}")]
    UnsupportedFeature(String),

    #[error("{0}")]
    InvalidTxnState(String),

    #[error("priority {0} is outside [0.001, 1000]")]
    InvalidPriority(f64),

    #[error("{0} specified multiple times")]
    DuplicateMode(&'static str),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TxnModeError>;
