//! Conversion of ranked entries into response records.

use tridict_lang_chinese::pinyin;
use tridict_types::{
    AudioInfo, ChineseEntry, Definition, HanziMeta, JapaneseEntry, KanjiMeta, Language,
    LanguageOutput, OutputMeta,
};

pub fn japanese_output(entry: JapaneseEntry) -> LanguageOutput {
    LanguageOutput {
        language: Language::Japanese,
        definition: join_glosses(&entry.definitions),
        audio: Some(AudioInfo::tts(entry.headword.as_str(), Language::Japanese)),
        rank: entry.frequency_rank,
        meta: OutputMeta::Kanji(KanjiMeta {
            jlpt_level: entry.jlpt_level,
            stroke_count: entry.stroke_count,
            components: entry.components,
            stroke_svg: entry.stroke_svg,
        }),
        headword: entry.headword,
        reading: entry.reading,
        examples: entry.examples,
    }
}

/// The stored numbered-tone pinyin is converted here and never leaves the engine.
pub fn chinese_output(entry: ChineseEntry) -> LanguageOutput {
    LanguageOutput {
        language: Language::Chinese,
        reading: pinyin::to_diacritic(&entry.pinyin),
        definition: join_glosses(&entry.definitions),
        audio: Some(AudioInfo::tts(entry.simplified.as_str(), Language::Chinese)),
        rank: entry.frequency_rank,
        meta: OutputMeta::Hanzi(HanziMeta {
            traditional: entry.traditional,
            hsk_level: entry.hsk_level,
            stroke_count: entry.stroke_count,
            components: entry.components,
            decomposition: entry.decomposition,
            stroke_svg: entry.stroke_svg,
        }),
        headword: entry.simplified,
        examples: entry.examples,
    }
}

fn join_glosses(definitions: &[Definition]) -> String {
    definitions
        .iter()
        .map(|d| d.gloss.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
