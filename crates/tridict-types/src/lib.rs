pub mod entry;
pub mod types;

pub use entry::{ChineseEntry, Definition, Example, JapaneseEntry};
pub use types::{
    AudioInfo, HanziMeta, InputLanguage, KanjiMeta, Language, LanguageOutput, MetaInfo,
    OutputMeta, Response,
};
