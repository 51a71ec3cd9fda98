mod errors;
mod summary_loader;

pub use errors::LoadError;
pub use summary_loader::{SummaryLoader, parse_summary};
