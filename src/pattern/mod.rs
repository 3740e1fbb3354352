mod compiled;
mod error;
mod lexer;

pub use compiled::{CompiledTemplate, RouteVariable, compile_template};
pub use error::{PatternError, PatternResult};
pub use lexer::{TemplateSegment, parse_segment};
