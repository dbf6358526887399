use thiserror::Error;

/// Failures at the edges of the planner: loading inputs, writing reports and
/// reading configuration. Plan computation itself cannot fail.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid date {value:?} on line {line}")]
    InvalidDate { line: usize, value: String },
    #[error("configuration failure: {0}")]
    Config(String),
    #[error("configuration parse failure: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
