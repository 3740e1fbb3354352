mod observer;
mod params;
pub mod resolver;

pub use observer::{MatchEvent, MatchObserver, MissEvent, MissKind, NoopObserver, TracingObserver};
pub(crate) use params::coerce_captures;
pub use resolver::first_match;
