use thiserror::Error;

/// Construction failures. Rendering itself never fails; out-of-range values
/// are clamped or projected instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The root lattice did not come out at the expected size.
    #[error("root lattice has {found} vectors, expected {expected}")]
    RootCount { expected: usize, found: usize },

    /// Unusable construction parameters.
    #[error("config error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
