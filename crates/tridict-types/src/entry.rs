use serde::{Deserialize, Serialize};

/// Usage sentence paired with its English translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub source_text: String,
    pub english_text: String,
}

impl Example {
    pub fn new(source_text: impl Into<String>, english_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            english_text: english_text.into(),
        }
    }
}

/// English gloss owned by a single entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub gloss: String,
    pub part_of_speech: Option<String>,
}

impl Definition {
    pub fn new(gloss: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
            part_of_speech: None,
        }
    }

    pub fn with_pos(gloss: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
            part_of_speech: Some(pos.into()),
        }
    }
}

/// Row of the Japanese lexicon, loaded together with its glosses and examples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JapaneseEntry {
    pub id: i64,
    pub headword: String,   // e.g. "食べる"
    pub reading: String,    // e.g. "たべる"
    pub is_common: bool,
    /// Lower is more frequent, None when the word is unranked
    pub frequency_rank: Option<u32>,
    pub jlpt_level: Option<String>, // e.g. "N5"
    pub stroke_count: Option<u32>,
    pub components: Option<String>,
    pub stroke_svg: Option<String>,
    pub definitions: Vec<Definition>,
    pub examples: Vec<Example>,
}

/// Row of the Chinese lexicon, loaded together with its glosses and examples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChineseEntry {
    pub id: i64,
    pub simplified: String,
    pub traditional: String,
    /// Numbered-tone pinyin as stored, e.g. "mao1"
    pub pinyin: String,
    pub is_common: bool,
    pub frequency_rank: Option<u32>,
    pub hsk_level: Option<String>,
    pub stroke_count: Option<u32>,
    pub components: Option<String>,
    pub decomposition: Option<String>,
    pub stroke_svg: Option<String>,
    pub definitions: Vec<Definition>,
    pub examples: Vec<Example>,
}

impl JapaneseEntry {
    pub fn first_gloss(&self) -> Option<&str> {
        self.definitions.first().map(|d| d.gloss.as_str())
    }
}

impl ChineseEntry {
    pub fn first_gloss(&self) -> Option<&str> {
        self.definitions.first().map(|d| d.gloss.as_str())
    }
}
