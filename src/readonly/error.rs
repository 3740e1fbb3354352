use crate::enums::MethodSet;
use crate::vartype::ConversionError;
use thiserror::Error;

/// Request-time lookup outcomes other than a match.
#[derive(Debug, Error)]
pub enum ReadOnlyError {
    #[error("no route matched path '{path}'")]
    RouteNotFound { path: String },
    #[error(
        "method {method} is not allowed for path '{path}' (allowed: {})",
        .allowed.to_header_value()
    )]
    MethodNotAllowed {
        method: String,
        path: String,
        allowed: MethodSet,
    },
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl ReadOnlyError {
    /// HTTP status the transport adapter should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ReadOnlyError::RouteNotFound { .. } => 404,
            ReadOnlyError::MethodNotAllowed { .. } => 405,
            ReadOnlyError::Conversion(_) => 500,
        }
    }
}

pub type ReadOnlyResult<T> = Result<T, ReadOnlyError>;
