use crate::error::{LangRankError, LrResult};
use crate::language::LanguageId;
use crate::profile::RankedProfile;
use crate::store::{reject_document, ProfileStore};
use std::collections::HashMap;
use std::io;
use std::sync::RwLock;
use tracing::warn;

/// In-process store. Entries are kept raw and validated on `load`, the same
/// way a file backend would see them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<LanguageId, Vec<(String, i64)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores entries without validating them.
    pub fn insert_raw(&self, language: LanguageId, entries: Vec<(String, i64)>) -> LrResult<()> {
        let mut guard = self.entries.write().map_err(|_| poisoned(&language))?;
        guard.insert(language, entries);
        Ok(())
    }

    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(m) => m.len(),
            Err(_) => {
                warn!("⚠️  Memory store lock poisoned; reporting it as empty.");
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(language: &LanguageId) -> LangRankError {
    LangRankError::storage(
        format!("memory store entry '{}'", language),
        io::Error::other("store lock poisoned"),
    )
}

impl ProfileStore for MemoryStore {
    /// A poisoned lock reads as "absent"; `load` and `save` report it as a
    /// `Storage` error instead.
    fn has(&self, language: &LanguageId) -> bool {
        match self.entries.read() {
            Ok(m) => m.contains_key(language),
            Err(_) => {
                warn!("⚠️  Memory store lock poisoned while checking '{}'.", language);
                false
            }
        }
    }

    fn load(&self, language: &LanguageId) -> LrResult<RankedProfile> {
        let guard = self.entries.read().map_err(|_| poisoned(language))?;
        let entries = guard.get(language).cloned().ok_or_else(|| {
            LangRankError::storage(
                format!("memory store entry '{}'", language),
                io::Error::new(io::ErrorKind::NotFound, "no stored profile"),
            )
        })?;

        RankedProfile::from_entries(entries)
            .map_err(|defect| LangRankError::corrupt(language.as_str(), defect))
    }

    fn save(&self, language: &LanguageId, profile: &RankedProfile) -> LrResult<()> {
        reject_document(language)?;

        let entries = profile
            .by_rank()
            .into_iter()
            .map(|(symbol, rank)| (symbol.to_string(), rank as i64))
            .collect();

        self.insert_raw(language.clone(), entries)
    }
}
