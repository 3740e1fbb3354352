pub mod enums;
pub mod handler;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod readonly;
pub mod registry;
pub mod router;
pub mod vartype;

pub use enums::{HttpMethod, MethodError, MethodSet};
pub use handler::{DispatchResult, Handler};
pub use matcher::{MatchObserver, NoopObserver, TracingObserver};
pub use readonly::{ReadOnlyError, RouterReadOnly};
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use vartype::{Arguments, ConversionError, FromValue, Value, VariableType};
