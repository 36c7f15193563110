use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::Example;

/// Lexicon a result comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::Chinese => "zh",
        }
    }

    /// Locale handed to text-to-speech
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Japanese => "ja-JP",
            Language::Chinese => "zh-CN",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdict of the script-based language detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputLanguage {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
    /// CJK ideographs without kana: could be either lexicon
    #[serde(rename = "ambiguous")]
    Ambiguous,
    #[serde(rename = "unknown")]
    Unknown,
}

impl InputLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            InputLanguage::English => "en",
            InputLanguage::Japanese => "ja",
            InputLanguage::Chinese => "zh",
            InputLanguage::Ambiguous => "ambiguous",
            InputLanguage::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Top-level record returned for every query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub meta: MetaInfo,
    pub outputs: Vec<LanguageOutput>,
}

impl Response {
    pub fn new(input_language: InputLanguage, query: impl Into<String>) -> Self {
        Self {
            meta: MetaInfo {
                input_language,
                query: query.into(),
            },
            outputs: Vec::new(),
        }
    }

    /// Outputs of one language, in response order
    pub fn outputs_for(&self, language: Language) -> impl Iterator<Item = &LanguageOutput> {
        self.outputs.iter().filter(move |o| o.language == language)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaInfo {
    pub input_language: InputLanguage,
    pub query: String,
}

/// One matched entry, ready for rendering or serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageOutput {
    pub language: Language,
    pub headword: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reading: String,
    pub definition: String,
    #[serde(skip_serializing_if = "is_unranked")]
    pub rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioInfo>,
    pub meta: OutputMeta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

fn is_unranked(rank: &Option<u32>) -> bool {
    rank.is_none_or(|r| r == 0)
}

/// Text-to-speech hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub locale: String,
}

impl AudioInfo {
    pub fn tts(text: impl Into<String>, language: Language) -> Self {
        Self {
            kind: "tts".to_string(),
            text: text.into(),
            locale: language.locale().to_string(),
        }
    }
}

/// Language-specific character metadata, keyed by `LanguageOutput::language`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputMeta {
    Kanji(KanjiMeta),
    Hanzi(HanziMeta),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KanjiMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_svg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HanziMeta {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub traditional: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decomposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_svg: Option<String>,
}
