use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Row, params};
use tridict_core::WordStore;
use tridict_types::{ChineseEntry, Definition, Example, JapaneseEntry, Language};

use crate::error::StoreError;

const SCHEMA: &str = include_str!("schema.sql");

/// Examples attached to a single entry
pub const MAX_EXAMPLES: usize = 5;

const JAPANESE_COLUMNS: &str = "w.id, w.headword, w.reading, w.is_common, w.frequency_rank, \
     w.jlpt_level, w.stroke_count, w.components, w.stroke_svg";

const CHINESE_COLUMNS: &str = "w.id, w.simplified, w.traditional, w.pinyin, w.is_common, \
     w.frequency_rank, w.hsk_level, w.stroke_count, w.components, w.decomposition, w.stroke_svg";

// Unranked rows sort after ranked ones
const ORDER: &str = "ORDER BY w.is_common DESC, w.frequency_rank IS NULL, w.frequency_rank ASC, w.id ASC";

/// SQLite-backed word store.
///
/// The connection sits behind a mutex so one store can serve lookups from
/// several threads.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open an existing dictionary database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::DatabaseNotFound(path.to_path_buf()));
        }

        let conn = Connection::open(path)?;
        configure(&conn)?;
        tracing::info!(path = %path.display(), "opened dictionary database");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new database file with an empty schema.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if path.exists() {
            return Err(StoreError::AlreadyExists(path.to_path_buf()));
        }

        let conn = Connection::open(path)?;
        configure(&conn)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.create_schema()?;
        tracing::info!(path = %path.display(), "created dictionary database");
        Ok(store)
    }

    /// Fresh in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        configure(&conn)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.create_schema()?;
        Ok(store)
    }

    pub fn create_schema(&self) -> Result<(), StoreError> {
        self.conn()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Insert a Japanese word with its definitions and examples, returning the new id.
    /// `entry.id` is ignored.
    pub fn insert_japanese(&self, entry: &JapaneseEntry) -> Result<i64, StoreError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO japanese_words \
             (headword, reading, is_common, frequency_rank, jlpt_level, stroke_count, components, stroke_svg) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.headword,
                entry.reading,
                entry.is_common,
                entry.frequency_rank,
                entry.jlpt_level,
                entry.stroke_count,
                entry.components,
                entry.stroke_svg,
            ],
        )?;
        let id = tx.last_insert_rowid();

        for def in &entry.definitions {
            tx.execute(
                "INSERT INTO japanese_definitions (word_id, english_gloss, pos) VALUES (?1, ?2, ?3)",
                params![id, def.gloss, def.part_of_speech],
            )?;
        }
        insert_examples(&tx, Language::Japanese, id, &entry.examples)?;

        tx.commit()?;
        Ok(id)
    }

    /// Insert a Chinese word with its definitions and examples, returning the new id.
    /// `entry.id` is ignored.
    pub fn insert_chinese(&self, entry: &ChineseEntry) -> Result<i64, StoreError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO chinese_words \
             (simplified, traditional, pinyin, is_common, frequency_rank, hsk_level, \
              stroke_count, components, decomposition, stroke_svg) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                entry.simplified,
                entry.traditional,
                entry.pinyin,
                entry.is_common,
                entry.frequency_rank,
                entry.hsk_level,
                entry.stroke_count,
                entry.components,
                entry.decomposition,
                entry.stroke_svg,
            ],
        )?;
        let id = tx.last_insert_rowid();

        for def in &entry.definitions {
            tx.execute(
                "INSERT INTO chinese_definitions (word_id, english_gloss) VALUES (?1, ?2)",
                params![id, def.gloss],
            )?;
        }
        insert_examples(&tx, Language::Chinese, id, &entry.examples)?;

        tx.commit()?;
        Ok(id)
    }

    /// Attach an example sentence to an existing word.
    pub fn insert_example(&self, language: Language, word_id: i64, example: &Example) -> Result<(), StoreError> {
        let conn = self.conn()?;
        insert_examples(&conn, language, word_id, std::slice::from_ref(example))
    }

    fn japanese_where(&self, filter: &str, param: &str) -> Result<Vec<JapaneseEntry>, StoreError> {
        let conn = self.conn()?;
        let sql = format!("SELECT DISTINCT {JAPANESE_COLUMNS} FROM japanese_words w {filter} {ORDER}");

        let mut stmt = conn.prepare(&sql)?;
        let mut entries = stmt
            .query_map([param], japanese_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for entry in &mut entries {
            entry.definitions = definitions(&conn, "japanese_definitions", entry.id, true)?;
            entry.examples = examples(&conn, Language::Japanese, entry.id)?;
        }
        tracing::debug!(language = "ja", param, count = entries.len(), "store lookup");
        Ok(entries)
    }

    fn chinese_where(&self, filter: &str, param: &str) -> Result<Vec<ChineseEntry>, StoreError> {
        let conn = self.conn()?;
        let sql = format!("SELECT DISTINCT {CHINESE_COLUMNS} FROM chinese_words w {filter} {ORDER}");

        let mut stmt = conn.prepare(&sql)?;
        let mut entries = stmt
            .query_map([param], chinese_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for entry in &mut entries {
            entry.definitions = definitions(&conn, "chinese_definitions", entry.id, false)?;
            entry.examples = examples(&conn, Language::Chinese, entry.id)?;
        }
        tracing::debug!(language = "zh", param, count = entries.len(), "store lookup");
        Ok(entries)
    }
}

impl WordStore for SqliteStore {
    type Error = StoreError;

    fn japanese_exact(&self, term: &str) -> Result<Vec<JapaneseEntry>, StoreError> {
        self.japanese_where("WHERE w.headword = ?1 OR w.reading = ?1", term)
    }

    fn japanese_by_gloss(&self, gloss: &str) -> Result<Vec<JapaneseEntry>, StoreError> {
        self.japanese_where(
            "JOIN japanese_definitions d ON d.word_id = w.id \
             WHERE unicode_lower(d.english_gloss) LIKE ?1 ESCAPE '\\'",
            &like_pattern(gloss),
        )
    }

    fn chinese_exact(&self, simplified: &str) -> Result<Vec<ChineseEntry>, StoreError> {
        self.chinese_where("WHERE w.simplified = ?1", simplified)
    }

    fn chinese_by_gloss(&self, gloss: &str) -> Result<Vec<ChineseEntry>, StoreError> {
        self.chinese_where(
            "JOIN chinese_definitions d ON d.word_id = w.id \
             WHERE unicode_lower(d.english_gloss) LIKE ?1 ESCAPE '\\'",
            &like_pattern(gloss),
        )
    }
}

/// Per-connection setup: foreign keys, and `unicode_lower` for gloss
/// matching. SQLite's own `lower()` only folds ASCII, while the pattern is
/// folded with Rust's Unicode rules, so both sides go through the same fold.
fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.create_scalar_function(
        "unicode_lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}

/// `%gloss%` with LIKE wildcards in the gloss matched literally
fn like_pattern(gloss: &str) -> String {
    let mut pattern = String::with_capacity(gloss.len() + 2);
    pattern.push('%');
    for c in gloss.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Non-positive ranks mean "unranked"
fn positive(value: Option<i64>) -> Option<u32> {
    value.filter(|v| *v > 0).and_then(|v| u32::try_from(v).ok())
}

fn japanese_row(row: &Row<'_>) -> rusqlite::Result<JapaneseEntry> {
    Ok(JapaneseEntry {
        id: row.get(0)?,
        headword: row.get(1)?,
        reading: row.get(2)?,
        is_common: row.get(3)?,
        frequency_rank: positive(row.get(4)?),
        jlpt_level: row.get(5)?,
        stroke_count: positive(row.get(6)?),
        components: row.get(7)?,
        stroke_svg: row.get(8)?,
        definitions: Vec::new(),
        examples: Vec::new(),
    })
}

fn chinese_row(row: &Row<'_>) -> rusqlite::Result<ChineseEntry> {
    Ok(ChineseEntry {
        id: row.get(0)?,
        simplified: row.get(1)?,
        traditional: row.get(2)?,
        pinyin: row.get(3)?,
        is_common: row.get(4)?,
        frequency_rank: positive(row.get(5)?),
        hsk_level: row.get(6)?,
        stroke_count: positive(row.get(7)?),
        components: row.get(8)?,
        decomposition: row.get(9)?,
        stroke_svg: row.get(10)?,
        definitions: Vec::new(),
        examples: Vec::new(),
    })
}

fn definitions(conn: &Connection, table: &str, word_id: i64, has_pos: bool) -> Result<Vec<Definition>, StoreError> {
    let pos = if has_pos { "pos" } else { "NULL" };
    let sql = format!("SELECT english_gloss, {pos} FROM {table} WHERE word_id = ?1 ORDER BY id");

    let mut stmt = conn.prepare_cached(&sql)?;
    let defs = stmt
        .query_map([word_id], |row| {
            Ok(Definition {
                gloss: row.get(0)?,
                part_of_speech: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(defs)
}

fn examples(conn: &Connection, language: Language, word_id: i64) -> Result<Vec<Example>, StoreError> {
    let mut stmt = conn.prepare_cached(
        "SELECT source_text, english_text FROM examples \
         WHERE language = ?1 AND word_id = ?2 ORDER BY id LIMIT ?3",
    )?;
    let examples = stmt
        .query_map(params![language.code(), word_id, MAX_EXAMPLES as i64], |row| {
            Ok(Example {
                source_text: row.get(0)?,
                english_text: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(examples)
}

fn insert_examples(conn: &Connection, language: Language, word_id: i64, examples: &[Example]) -> Result<(), StoreError> {
    for ex in examples {
        conn.execute(
            "INSERT INTO examples (language, word_id, source_text, english_text) VALUES (?1, ?2, ?3, ?4)",
            params![language.code(), word_id, ex.source_text, ex.english_text],
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat() -> JapaneseEntry {
        JapaneseEntry {
            headword: "猫".into(),
            reading: "ねこ".into(),
            is_common: true,
            frequency_rank: Some(1),
            jlpt_level: Some("N5".into()),
            stroke_count: Some(11),
            definitions: vec![Definition::with_pos("cat", "noun")],
            examples: vec![Example::new("猫が好きです。", "I like cats.")],
            ..Default::default()
        }
    }

    fn hanzi(simplified: &str, pinyin: &str, common: bool, rank: Option<u32>, gloss: &str) -> ChineseEntry {
        ChineseEntry {
            simplified: simplified.into(),
            traditional: simplified.into(),
            pinyin: pinyin.into(),
            is_common: common,
            frequency_rank: rank,
            definitions: vec![Definition::new(gloss)],
            ..Default::default()
        }
    }

    #[test]
    fn exact_lookup_matches_headword_and_reading() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.insert_japanese(&cat()).unwrap();

        let by_headword = store.japanese_exact("猫").unwrap();
        let by_reading = store.japanese_exact("ねこ").unwrap();

        assert_eq!(by_headword.len(), 1);
        assert_eq!(by_headword, by_reading);

        let entry = &by_headword[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.jlpt_level.as_deref(), Some("N5"));
        assert_eq!(entry.definitions, vec![Definition::with_pos("cat", "noun")]);
        assert_eq!(entry.examples.len(), 1);

        assert!(store.japanese_exact("犬").unwrap().is_empty());
    }

    #[test]
    fn gloss_lookup_is_case_insensitive_substring() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_chinese(&hanzi("猫", "mao1", true, Some(1), "Cat")).unwrap();
        store.insert_chinese(&hanzi("熊猫", "xiong2 mao1", true, Some(300), "giant panda")).unwrap();

        let found = store.chinese_by_gloss("CAT").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].simplified, "猫");

        let found = store.chinese_by_gloss("anda").unwrap();
        assert_eq!(found[0].simplified, "熊猫");
    }

    #[test]
    fn gloss_lookup_returns_each_word_once() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut entry = cat();
        entry.definitions = vec![Definition::new("cat"), Definition::new("domestic cat")];
        store.insert_japanese(&entry).unwrap();

        let found = store.japanese_by_gloss("cat").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].definitions.len(), 2);
        assert_eq!(found[0].first_gloss(), Some("cat"));
    }

    #[test]
    fn like_wildcards_in_gloss_are_literal() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_chinese(&hanzi("百", "bai3", true, Some(50), "hundred")).unwrap();
        store.insert_chinese(&hanzi("百分之", "bai3 fen1 zhi1", false, None, "100% sure")).unwrap();

        let found = store.chinese_by_gloss("%").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].simplified, "百分之");
        assert!(store.chinese_by_gloss("h_ndred").unwrap().is_empty());
    }

    #[test]
    fn rows_come_back_common_first_then_by_rank() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_chinese(&hanzi("甲", "jia3", false, Some(1), "big")).unwrap();
        store.insert_chinese(&hanzi("乙", "yi3", true, None, "big")).unwrap();
        store.insert_chinese(&hanzi("丙", "bing3", true, Some(40), "big")).unwrap();

        let order: Vec<_> = store
            .chinese_by_gloss("big")
            .unwrap()
            .into_iter()
            .map(|e| e.simplified)
            .collect();
        assert_eq!(order, ["丙", "乙", "甲"]);
    }

    #[test]
    fn non_positive_rank_reads_as_unranked() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.insert_japanese(&cat()).unwrap();
        store
            .conn()
            .unwrap()
            .execute("UPDATE japanese_words SET frequency_rank = 0 WHERE id = ?1", [id])
            .unwrap();

        assert_eq!(store.japanese_exact("猫").unwrap()[0].frequency_rank, None);
    }

    #[test]
    fn examples_are_capped() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.insert_chinese(&hanzi("猫", "mao1", true, Some(1), "cat")).unwrap();
        for i in 0..8 {
            store
                .insert_example(Language::Chinese, id, &Example::new(format!("例{i}"), format!("example {i}")))
                .unwrap();
        }
        // A Japanese example with the same word id must not leak in
        store
            .insert_example(Language::Japanese, id, &Example::new("猫です", "It's a cat"))
            .unwrap();

        let entry = &store.chinese_exact("猫").unwrap()[0];
        assert_eq!(entry.examples.len(), MAX_EXAMPLES);
        assert_eq!(entry.examples[0].source_text, "例0");
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");

        match SqliteStore::open(&path) {
            Err(StoreError::DatabaseNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected DatabaseNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn created_database_can_be_reopened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.db");

        {
            let store = SqliteStore::create(&path).unwrap();
            store.insert_japanese(&cat()).unwrap();
        }

        assert!(matches!(SqliteStore::create(&path), Err(StoreError::AlreadyExists(_))));

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.japanese_by_gloss("cat").unwrap().len(), 1);
    }

    #[test]
    fn gloss_lookup_folds_non_ascii_case() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_chinese(&hanzi("苏黎世", "Su1 li2 shi4", false, None, "ZÜRICH")).unwrap();

        for query in ["ZÜRICH", "zürich", "Zürich", "ÜRI"] {
            let found = store.chinese_by_gloss(query).unwrap();
            assert_eq!(found.len(), 1, "{query}");
            assert_eq!(found[0].simplified, "苏黎世");
        }
        assert!(store.chinese_by_gloss("zurich").unwrap().is_empty());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Cat"), "%cat%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }
}
