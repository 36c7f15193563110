//! SQLite word store for the trilingual dictionary.

pub mod error;
pub mod sample;
pub mod sqlite;

pub use error::StoreError;
pub use sample::seed_sample;
pub use sqlite::{MAX_EXAMPLES, SqliteStore};
