use crate::corpus::CorpusSource;
use crate::error::{LangRankError, LrResult};
use crate::profile::{build_profile, RankedProfile, SymbolExtractor};
use crate::store::ProfileStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

/// Pseudo-language under which the document being classified is profiled.
pub const DOCUMENT_LANGUAGE: &str = "Input";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(String);

impl LanguageId {
    pub fn new(name: impl Into<String>) -> LrResult<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(LangRankError::Config("language name is empty".to_string()));
        }
        if trimmed.starts_with('.')
            || trimmed.contains(|c: char| matches!(c, '/' | '\\' | '=') || c.is_control())
        {
            return Err(LangRankError::Config(format!(
                "invalid language name '{}': no path separators, '=' or leading '.'",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn document() -> Self {
        Self(DOCUMENT_LANGUAGE.to_string())
    }

    pub fn is_document(&self) -> bool {
        self.0 == DOCUMENT_LANGUAGE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageId {
    type Err = LangRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    BuiltThisRun,
    LoadedFromStorage,
}

/// A candidate language's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub language: LanguageId,
    pub provenance: Provenance,
    pub profile: RankedProfile,
}

/// Profile of the text being classified. Never persisted, never loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProfile {
    pub profile: RankedProfile,
}

pub fn build_document_profile(text: &str, extractor: &dyn SymbolExtractor) -> DocumentProfile {
    DocumentProfile {
        profile: build_profile(text, extractor),
    }
}

/// Returns the stored profile for `language`, or trains and stores one.
///
/// A stored profile is returned as-is and the corpus is never read. The
/// document pseudo-language is always built fresh and never touches the store.
pub fn load_or_train(
    language: &LanguageId,
    corpus: &dyn CorpusSource,
    store: &dyn ProfileStore,
    extractor: &dyn SymbolExtractor,
) -> LrResult<LanguageProfile> {
    if language.is_document() {
        let text = corpus.read_text(language)?;
        return Ok(LanguageProfile {
            language: language.clone(),
            provenance: Provenance::BuiltThisRun,
            profile: build_profile(&text, extractor),
        });
    }

    if store.has(language) {
        let profile = store.load(language)?;
        info!(
            "📂 Loaded profile '{}' ({} symbols)",
            language,
            profile.len()
        );
        return Ok(LanguageProfile {
            language: language.clone(),
            provenance: Provenance::LoadedFromStorage,
            profile,
        });
    }

    train_language(language, corpus, store, extractor)
}

/// Builds `language`'s profile from its corpus and persists it, replacing any
/// stored copy.
pub fn train_language(
    language: &LanguageId,
    corpus: &dyn CorpusSource,
    store: &dyn ProfileStore,
    extractor: &dyn SymbolExtractor,
) -> LrResult<LanguageProfile> {
    if language.is_document() {
        return Err(LangRankError::ReservedLanguage(language.to_string()));
    }

    debug!("   Training profile for '{}'", language);
    let text = corpus.read_text(language)?;
    let profile = build_profile(&text, extractor);
    store.save(language, &profile)?;

    info!(
        "🛠  Trained profile '{}' ({} symbols)",
        language,
        profile.len()
    );

    Ok(LanguageProfile {
        language: language.clone(),
        provenance: Provenance::BuiltThisRun,
        profile,
    })
}
