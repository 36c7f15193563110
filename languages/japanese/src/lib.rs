pub mod jlpt;

pub use jlpt::JlptLevel;
