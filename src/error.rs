use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("structural validation failed: {0}")]
    StructuralValidation(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
