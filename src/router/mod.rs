mod errors;
mod options;
mod service;

pub use crate::readonly::RouterReadOnly;
pub use errors::{RouterError, RouterResult};
pub use options::{RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use service::Router;
