//! Small bilingual word list for development and tests.

use tridict_types::{ChineseEntry, Definition, Example, JapaneseEntry};

use crate::error::StoreError;
use crate::sqlite::SqliteStore;

struct SampleWord {
    english: &'static str,
    headword: &'static str,
    reading: &'static str,
    simplified: &'static str,
    traditional: &'static str,
    pinyin: &'static str,
    jlpt: &'static str,
    hsk: &'static str,
    strokes: u32,
}

#[allow(clippy::too_many_arguments)]
const fn word(
    english: &'static str,
    headword: &'static str,
    reading: &'static str,
    simplified: &'static str,
    traditional: &'static str,
    pinyin: &'static str,
    jlpt: &'static str,
    hsk: &'static str,
    strokes: u32,
) -> SampleWord {
    SampleWord {
        english,
        headword,
        reading,
        simplified,
        traditional,
        pinyin,
        jlpt,
        hsk,
        strokes,
    }
}

#[rustfmt::skip]
const WORDS: &[SampleWord] = &[
    word("cat",    "猫",     "ねこ",     "猫",   "貓",   "mao1",        "N3", "1", 11),
    word("dog",    "犬",     "いぬ",     "狗",   "狗",   "gou3",        "N3", "2", 8),
    word("eat",    "食べる", "たべる",   "吃",   "吃",   "chi1",        "N4", "1", 6),
    word("drink",  "飲む",   "のむ",     "喝",   "喝",   "he1",         "N4", "1", 12),
    word("book",   "本",     "ほん",     "书",   "書",   "shu1",        "N5", "1", 4),
    word("water",  "水",     "みず",     "水",   "水",   "shui3",       "N5", "1", 4),
    word("fire",   "火",     "ひ",       "火",   "火",   "huo3",        "N5", "1", 4),
    word("tree",   "木",     "き",       "树",   "樹",   "shu4",        "N5", "1", 4),
    word("person", "人",     "ひと",     "人",   "人",   "ren2",        "N5", "1", 2),
    word("big",    "大きい", "おおきい", "大",   "大",   "da4",         "N5", "1", 3),
    word("small",  "小さい", "ちいさい", "小",   "小",   "xiao3",       "N5", "1", 3),
    word("good",   "良い",   "よい",     "好",   "好",   "hao3",        "N4", "1", 6),
    word("bad",    "悪い",   "わるい",   "坏",   "壞",   "huai4",       "N4", "2", 7),
    word("house",  "家",     "いえ",     "家",   "家",   "jia1",        "N5", "1", 10),
    word("school", "学校",   "がっこう", "学校", "學校", "xue2 xiao4",  "N5", "1", 10),
    word("friend", "友達",   "ともだち", "朋友", "朋友", "peng2 you3",  "N4", "1", 8),
    word("time",   "時間",   "じかん",   "时间", "時間", "shi2 jian1",  "N4", "1", 10),
    word("year",   "年",     "とし",     "年",   "年",   "nian2",       "N5", "1", 6),
    word("day",    "日",     "ひ",       "天",   "天",   "tian1",       "N5", "1", 4),
    word("hand",   "手",     "て",       "手",   "手",   "shou3",       "N5", "1", 4),
];

// (japanese, chinese, english) for the first few words
const EXAMPLES: &[(&str, &str, &str)] = &[
    ("猫が好きです。", "我喜欢猫。", "I like cats."),
    ("犬を飼っています。", "我有一只狗。", "I have a dog."),
    ("ご飯を食べます。", "我吃饭。", "I eat rice."),
    ("水を飲みます。", "我喝水。", "I drink water."),
    ("本を読みます。", "我看书。", "I read books."),
];

/// Number of word pairs written by [`seed_sample`]
pub fn sample_size() -> usize {
    WORDS.len()
}

/// Fill `store` with the sample word list. Each word becomes one Japanese and
/// one Chinese entry, ranked by its position in the list.
pub fn seed_sample(store: &SqliteStore) -> Result<(), StoreError> {
    for (idx, w) in WORDS.iter().enumerate() {
        let rank = u32::try_from(idx + 1).ok();
        let (ja_example, zh_example) = match EXAMPLES.get(idx) {
            Some((ja, zh, en)) => (vec![Example::new(*ja, *en)], vec![Example::new(*zh, *en)]),
            None => (Vec::new(), Vec::new()),
        };

        store.insert_japanese(&JapaneseEntry {
            headword: w.headword.to_string(),
            reading: w.reading.to_string(),
            is_common: true,
            frequency_rank: rank,
            jlpt_level: Some(w.jlpt.to_string()),
            stroke_count: Some(w.strokes),
            definitions: vec![Definition::with_pos(w.english, "noun")],
            examples: ja_example,
            ..Default::default()
        })?;

        store.insert_chinese(&ChineseEntry {
            simplified: w.simplified.to_string(),
            traditional: w.traditional.to_string(),
            pinyin: w.pinyin.to_string(),
            is_common: true,
            frequency_rank: rank,
            hsk_level: Some(w.hsk.to_string()),
            stroke_count: Some(w.strokes),
            definitions: vec![Definition::new(w.english)],
            examples: zh_example,
            ..Default::default()
        })?;
    }

    tracing::debug!(words = WORDS.len(), examples = EXAMPLES.len(), "seeded sample dictionary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tridict_core::WordStore;

    #[test]
    fn seeds_both_lexicons() {
        let store = SqliteStore::open_in_memory().unwrap();
        seed_sample(&store).unwrap();

        let cat = &store.japanese_exact("ねこ").unwrap()[0];
        assert_eq!(cat.headword, "猫");
        assert_eq!(cat.frequency_rank, Some(1));
        assert_eq!(cat.examples[0].english_text, "I like cats.");

        let dog = &store.chinese_exact("狗").unwrap()[0];
        assert_eq!(dog.pinyin, "gou3");
        assert_eq!(dog.hsk_level.as_deref(), Some("2"));
        assert_eq!(dog.examples[0].source_text, "我有一只狗。");

        let hand = &store.chinese_exact("手").unwrap()[0];
        assert!(hand.examples.is_empty());
    }

    #[test]
    fn every_word_is_reachable_by_gloss() {
        let store = SqliteStore::open_in_memory().unwrap();
        seed_sample(&store).unwrap();

        for w in WORDS {
            assert!(!store.japanese_by_gloss(w.english).unwrap().is_empty(), "{}", w.english);
            assert!(!store.chinese_by_gloss(w.english).unwrap().is_empty(), "{}", w.english);
        }
        assert_eq!(sample_size(), 20);
    }
}
