use std::fmt;

use tridict_types::{InputLanguage, Language};

/// Which store read a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    /// Lookup of the search term itself
    Direct,
    /// Gloss lookup in the other lexicon using the best entry's English gloss
    Pivot,
    /// Existence check used to resolve an ambiguous ideograph query
    Probe,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookupStage::Direct => "direct",
            LookupStage::Pivot => "pivot",
            LookupStage::Probe => "probe",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("empty query")]
    EmptyQuery,

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(InputLanguage),

    #[error("{stage} {language} lookup failed")]
    Store {
        stage: LookupStage,
        language: Language,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl QueryError {
    pub(crate) fn store<E>(stage: LookupStage, language: Language) -> impl FnOnce(E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        move |source| QueryError::Store {
            stage,
            language,
            source: Box::new(source),
        }
    }
}
