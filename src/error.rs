use crate::profile::ProfileDefect;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangRankError {
    #[error("Storage Error on '{resource}': {source}")]
    Storage {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Corrupt Profile for '{language}': {defect}. Delete the stale profile and re-run `train`."
    )]
    CorruptProfile {
        language: String,
        defect: ProfileDefect,
    },

    #[error("No candidate languages: at least one language profile is required")]
    NoCandidates,

    #[error("Language '{0}' is reserved for the input document and cannot be persisted")]
    ReservedLanguage(String),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl LangRankError {
    pub fn storage(resource: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            resource: resource.into(),
            source,
        }
    }

    pub fn corrupt(language: impl Into<String>, defect: ProfileDefect) -> Self {
        Self::CorruptProfile {
            language: language.into(),
            defect,
        }
    }
}

pub type LrResult<T> = Result<T, LangRankError>;
