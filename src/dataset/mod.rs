//! Static postal-code dataset: record schema and bulk loader.

pub mod loader;
pub mod record;

pub use loader::{load_from_path, load_from_reader};
pub use record::PostalRecord;
