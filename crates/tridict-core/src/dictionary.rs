use tridict_types::{ChineseEntry, JapaneseEntry};

/// Read-only lookups against the trilingual word store.
///
/// Every returned entry carries its definitions and examples already; the
/// engine never goes back to the store for sub-records. Exact lookups are
/// case-sensitive, gloss lookups are case-insensitive substring matches.
pub trait WordStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Japanese entries whose headword or reading equals `term`
    fn japanese_exact(&self, term: &str) -> Result<Vec<JapaneseEntry>, Self::Error>;

    /// Japanese entries with an English gloss containing `gloss`
    fn japanese_by_gloss(&self, gloss: &str) -> Result<Vec<JapaneseEntry>, Self::Error>;

    /// Chinese entries whose simplified form equals `simplified`
    fn chinese_exact(&self, simplified: &str) -> Result<Vec<ChineseEntry>, Self::Error>;

    /// Chinese entries with an English gloss containing `gloss`
    fn chinese_by_gloss(&self, gloss: &str) -> Result<Vec<ChineseEntry>, Self::Error>;
}

impl<S: WordStore + ?Sized> WordStore for &S {
    type Error = S::Error;

    fn japanese_exact(&self, term: &str) -> Result<Vec<JapaneseEntry>, Self::Error> {
        (**self).japanese_exact(term)
    }

    fn japanese_by_gloss(&self, gloss: &str) -> Result<Vec<JapaneseEntry>, Self::Error> {
        (**self).japanese_by_gloss(gloss)
    }

    fn chinese_exact(&self, simplified: &str) -> Result<Vec<ChineseEntry>, Self::Error> {
        (**self).chinese_exact(simplified)
    }

    fn chinese_by_gloss(&self, gloss: &str) -> Result<Vec<ChineseEntry>, Self::Error> {
        (**self).chinese_by_gloss(gloss)
    }
}
