use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid handle count: {0} (expected 1 or 2)")]
    InvalidHandleCount(u8),

    #[error("invalid domain: min={min}, max={max}")]
    InvalidDomain { min: f64, max: f64 },

    #[error("unparseable domain bound `{0}`")]
    InvalidBound(String),

    #[error("unknown step granularity `{0}`")]
    UnknownStepTag(String),

    #[error("invalid number format: {0}")]
    InvalidNumberFormat(String),

    #[error("bound field `{0}` does not exist")]
    UnknownField(String),

    #[error("widget error: {0}")]
    Widget(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
