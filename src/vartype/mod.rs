mod error;
mod registry;
mod value;

pub use error::{ConversionError, ConversionResult};
pub use registry::VariableType;
pub use value::{Arguments, FromValue, Value};
