use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{name} must be a single ASCII character, got {value:?}")]
    NotSingleByte { name: &'static str, value: char },
    #[error("sample size must be at least 1")]
    EmptySample,
}

pub type Result<T> = std::result::Result<T, ModelError>;
