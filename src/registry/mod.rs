mod route;
mod stats;
mod store;

pub use route::Route;
pub use stats::RegistryMetrics;
pub use store::RouteTable;
