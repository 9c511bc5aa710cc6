use thiserror::Error;

/// Errors raised while generating figure markup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FigureError {
    /// The time divisor for a dataset was zero.
    #[error("size divisor for dataset '{name}' must be non-zero")]
    ZeroSizeDivisor { name: String },

    /// A requested dataset is not in the dataset table.
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}
