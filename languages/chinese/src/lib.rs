pub mod hsk;
pub mod pinyin;

pub use hsk::HskLevel;
pub use pinyin::to_diacritic;
