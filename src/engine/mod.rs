mod pipeline;

pub use pipeline::{DEFAULT_TOP_K, SpendPipeline};
