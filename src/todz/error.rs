use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid invocation. Carries the full line to print; the CLI maps
    /// this to exit code 2 instead of the generic error path.
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, TodzError>;
