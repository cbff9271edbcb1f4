// errors.rs
use thiserror::Error;

/// Request-level failures. Backend trouble never surfaces here; the
/// controller absorbs it and renders an inline state instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}
