use crate::config::ProfileParams;
use crate::corpus::CorpusSource;
use crate::error::{LangRankError, LrResult};
use crate::language::{build_document_profile, load_or_train, LanguageId, LanguageProfile};
use crate::profile::SymbolExtractor;
use crate::ranking::{rank_languages, Ranking};
use crate::store::ProfileStore;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::info;

/// Candidate profiles prepared once and reused for any number of documents.
///
/// Profiles are never mutated after `prepare`, so a `Classifier` can be shared
/// across threads; each `classify` call builds its own document profile.
pub struct Classifier {
    extractor: Arc<dyn SymbolExtractor>,
    languages: Vec<LanguageProfile>,
}

impl Classifier {
    /// Loads or trains every candidate. Output order follows `candidates`.
    pub fn prepare(
        candidates: &[LanguageId],
        corpus: &dyn CorpusSource,
        store: &dyn ProfileStore,
        params: &ProfileParams,
    ) -> LrResult<Self> {
        if candidates.is_empty() {
            return Err(LangRankError::NoCandidates);
        }

        let extractor = params.extractor()?;
        info!(
            "📚 Preparing {} candidate languages ({}-gram symbols)",
            candidates.len(),
            extractor.n()
        );

        let languages = candidates
            .par_iter()
            .map(|language| load_or_train(language, corpus, store, &extractor))
            .collect::<LrResult<Vec<_>>>()?;

        Ok(Self {
            extractor: Arc::new(extractor),
            languages,
        })
    }

    pub fn from_profiles(
        languages: Vec<LanguageProfile>,
        extractor: Arc<dyn SymbolExtractor>,
    ) -> LrResult<Self> {
        if languages.is_empty() {
            return Err(LangRankError::NoCandidates);
        }
        Ok(Self {
            extractor,
            languages,
        })
    }

    pub fn languages(&self) -> &[LanguageProfile] {
        &self.languages
    }

    pub fn language(&self, id: &LanguageId) -> Option<&LanguageProfile> {
        self.languages.iter().find(|l| &l.language == id)
    }

    pub fn classify(&self, text: &str) -> LrResult<Ranking> {
        let document = build_document_profile(text, self.extractor.as_ref());
        rank_languages(&document, &self.languages)
    }
}
