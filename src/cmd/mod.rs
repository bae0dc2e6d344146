pub mod classify;
pub mod train;

use langrank::corpus::{CorpusMap, LanguageSpec};
use langrank::{LangRankError, LanguageId, LrResult};

/// Candidate ids in command-line order plus their corpus files.
pub fn candidates(specs: &[LanguageSpec]) -> LrResult<(Vec<LanguageId>, CorpusMap)> {
    let mut ids = Vec::with_capacity(specs.len());
    let mut corpus = CorpusMap::new();

    for spec in specs {
        if spec.language.is_document() {
            return Err(LangRankError::ReservedLanguage(spec.language.to_string()));
        }
        if let Some(existing) = corpus.path_of(&spec.language) {
            if existing != spec.corpus.as_path() {
                return Err(LangRankError::Config(format!(
                    "language '{}' given twice ('{}' and '{}')",
                    spec.language,
                    existing.display(),
                    spec.corpus.display()
                )));
            }
            continue;
        }
        corpus.insert(spec.language.clone(), spec.corpus.clone());
        ids.push(spec.language.clone());
    }

    Ok((ids, corpus))
}
