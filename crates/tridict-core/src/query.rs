//! Query triangulation: detect the input language, look the term up, and
//! pivot through an English gloss into the other CJK lexicon.

use tridict_types::{ChineseEntry, InputLanguage, JapaneseEntry, Language, LanguageOutput, Response};

use crate::dictionary::WordStore;
use crate::error::{LookupStage, QueryError};
use crate::language;
use crate::output::{chinese_output, japanese_output};
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::rank::rank;

/// Look `input` up in `store`, keeping at most `limit` entries per ranked
/// lookup (0 means unlimited).
pub fn query<S: WordStore>(store: &S, input: &str, limit: usize) -> Result<Response, QueryError> {
    let term = DefaultPreprocessor.process(input);
    if term.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    let detected = language::detect(&term);
    tracing::debug!(query = %term, language = %detected, "detected input language");

    run(store, term, detected, limit)
}

/// Like [`query`], but skips detection and treats `input` as `language`.
pub fn query_as<S: WordStore>(
    store: &S,
    input: &str,
    language: InputLanguage,
    limit: usize,
) -> Result<Response, QueryError> {
    let term = DefaultPreprocessor.process(input);
    if term.is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    run(store, term, language, limit)
}

fn run<S: WordStore>(
    store: &S,
    term: String,
    language: InputLanguage,
    limit: usize,
) -> Result<Response, QueryError> {
    let triangulation = Triangulation { store, limit };
    let outputs = match language {
        InputLanguage::English => triangulation.from_english(&term)?,
        InputLanguage::Japanese => triangulation.from_japanese(&term)?,
        InputLanguage::Chinese => triangulation.from_chinese(&term)?,
        InputLanguage::Ambiguous => triangulation.ambiguous(&term)?,
        InputLanguage::Unknown => return Err(QueryError::UnsupportedLanguage(language)),
    };

    let mut response = Response::new(language, term);
    response.outputs = outputs;
    Ok(response)
}

/// One query execution over a store
struct Triangulation<'a, S> {
    store: &'a S,
    limit: usize,
}

impl<S: WordStore> Triangulation<'_, S> {
    /// English is already the pivot language: search both lexicons' glosses.
    fn from_english(&self, term: &str) -> Result<Vec<LanguageOutput>, QueryError> {
        let mut outputs = Vec::new();

        let japanese = self.japanese_by_gloss(term, LookupStage::Direct)?;
        outputs.extend(japanese.into_iter().map(japanese_output));

        let chinese = self.chinese_by_gloss(term, LookupStage::Direct)?;
        outputs.extend(chinese.into_iter().map(chinese_output));

        Ok(outputs)
    }

    fn from_japanese(&self, term: &str) -> Result<Vec<LanguageOutput>, QueryError> {
        let matches = self
            .store
            .japanese_exact(term)
            .map_err(QueryError::store(LookupStage::Direct, Language::Japanese))?;
        self.pivot_from_japanese(matches)
    }

    fn from_chinese(&self, term: &str) -> Result<Vec<LanguageOutput>, QueryError> {
        let matches = self
            .store
            .chinese_exact(term)
            .map_err(QueryError::store(LookupStage::Direct, Language::Chinese))?;
        self.pivot_from_chinese(matches)
    }

    /// Ideographs alone can't tell the lexicons apart, so whichever one
    /// contains the term decides. Japanese is checked first and wins when
    /// both match.
    fn ambiguous(&self, term: &str) -> Result<Vec<LanguageOutput>, QueryError> {
        let japanese = self
            .store
            .japanese_exact(term)
            .map_err(QueryError::store(LookupStage::Probe, Language::Japanese))?;
        let chinese = self
            .store
            .chinese_exact(term)
            .map_err(QueryError::store(LookupStage::Probe, Language::Chinese))?;

        let resolved = if !japanese.is_empty() {
            Some(Language::Japanese)
        } else if !chinese.is_empty() {
            Some(Language::Chinese)
        } else {
            None
        };
        tracing::debug!(
            japanese = japanese.len(),
            chinese = chinese.len(),
            resolved = resolved.map_or("none", |l| l.code()),
            "resolved ambiguous query"
        );

        match resolved {
            Some(Language::Japanese) => self.pivot_from_japanese(japanese),
            Some(Language::Chinese) => self.pivot_from_chinese(chinese),
            None => Ok(Vec::new()),
        }
    }

    fn pivot_from_japanese(&self, matches: Vec<JapaneseEntry>) -> Result<Vec<LanguageOutput>, QueryError> {
        let ranked = rank(matches, self.limit);
        tracing::debug!(count = ranked.len(), language = "ja", "direct matches");

        let Some(best) = ranked.first() else {
            return Ok(Vec::new());
        };
        let pivot = best.first_gloss().map(str::to_owned);

        let mut outputs: Vec<LanguageOutput> = ranked.into_iter().map(japanese_output).collect();

        if let Some(gloss) = pivot.as_deref().filter(|g| !g.trim().is_empty()) {
            let chinese = self.chinese_by_gloss(gloss, LookupStage::Pivot)?;
            outputs.extend(chinese.into_iter().map(chinese_output));
        }

        Ok(outputs)
    }

    fn pivot_from_chinese(&self, matches: Vec<ChineseEntry>) -> Result<Vec<LanguageOutput>, QueryError> {
        let ranked = rank(matches, self.limit);
        tracing::debug!(count = ranked.len(), language = "zh", "direct matches");

        let Some(best) = ranked.first() else {
            return Ok(Vec::new());
        };
        let pivot = best.first_gloss().map(str::to_owned);

        let mut outputs: Vec<LanguageOutput> = ranked.into_iter().map(chinese_output).collect();

        if let Some(gloss) = pivot.as_deref().filter(|g| !g.trim().is_empty()) {
            let japanese = self.japanese_by_gloss(gloss, LookupStage::Pivot)?;
            outputs.extend(japanese.into_iter().map(japanese_output));
        }

        Ok(outputs)
    }

    fn japanese_by_gloss(&self, gloss: &str, stage: LookupStage) -> Result<Vec<JapaneseEntry>, QueryError> {
        let found = self
            .store
            .japanese_by_gloss(gloss)
            .map_err(QueryError::store(stage, Language::Japanese))?;
        tracing::debug!(%stage, gloss, count = found.len(), language = "ja", "gloss lookup");
        Ok(rank(found, self.limit))
    }

    fn chinese_by_gloss(&self, gloss: &str, stage: LookupStage) -> Result<Vec<ChineseEntry>, QueryError> {
        let found = self
            .store
            .chinese_by_gloss(gloss)
            .map_err(QueryError::store(stage, Language::Chinese))?;
        tracing::debug!(%stage, gloss, count = found.len(), language = "zh", "gloss lookup");
        Ok(rank(found, self.limit))
    }
}
