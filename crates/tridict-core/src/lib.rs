pub mod dictionary;
pub mod error;
pub mod language;
pub mod output;
pub mod preprocess;
pub mod query;
pub mod rank;


pub use dictionary::WordStore;
pub use error::{LookupStage, QueryError};
pub use language::detect;
pub use query::{query, query_as};
pub use rank::{Rankable, rank};
