//! Loading and aggregation of the Algerian forest fires dataset.

pub mod loader;
pub mod stats;

pub use loader::{DatasetError, FireClass, FireRow, load_dataset};
