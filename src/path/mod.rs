mod normalize;

pub use normalize::{normalize_path, segments, strip_prefix};
