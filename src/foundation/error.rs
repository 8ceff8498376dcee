/// Convenience result type used across plotgrid.
pub type GridResult<T> = Result<T, GridError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The transform math itself never fails; errors come from constructing a grid from untrusted
/// values and from loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Invalid grid parameters (row count, zoom factor, clip limit).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or parsing a grid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Build a [`GridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
