use thiserror::Error;

/// Canonical result for the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// The engine's single domain error.
///
/// Missing fields, empty value sets, and empty combinator part lists are all
/// valid edge cases with neutral behavior, not errors. The one thing callers
/// can get wrong is an argument that no collection makes valid, e.g. a
/// negative limit count.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
