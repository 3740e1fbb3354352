use crate::enums::MethodError;
use crate::pattern::PatternError;
use crate::readonly::ReadOnlyError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{template}'")]
    AddWhileSealed { template: String },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error("no methods given for route '{template}'")]
    EmptyMethods { template: String },
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Method(#[from] MethodError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    ReadOnly(#[from] ReadOnlyError),
}

impl RouterError {
    /// HTTP status for request-time outcomes; `None` for setup errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RouterError::ReadOnly(err) => Some(err.status_code()),
            _ => None,
        }
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
