pub mod file;
pub mod memory;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;

use crate::error::{LangRankError, LrResult};
use crate::language::LanguageId;
use crate::profile::RankedProfile;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Key-value persistence for trained language profiles.
///
/// Implementations must refuse to `save` the document pseudo-language.
pub trait ProfileStore: Send + Sync {
    fn has(&self, language: &LanguageId) -> bool;

    /// Loads and validates the stored profile; malformed data is a
    /// `CorruptProfile` error.
    fn load(&self, language: &LanguageId) -> LrResult<RankedProfile>;

    fn save(&self, language: &LanguageId, profile: &RankedProfile) -> LrResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ProfileFormat {
    #[default]
    Tsv,
    Json,
}

impl ProfileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ProfileFormat::Tsv => "tsv",
            ProfileFormat::Json => "json",
        }
    }
}

/// One `(symbol, rank)` pair as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub symbol: String,
    pub rank: i64,
}

pub(crate) fn reject_document(language: &LanguageId) -> LrResult<()> {
    if language.is_document() {
        return Err(LangRankError::ReservedLanguage(language.to_string()));
    }
    Ok(())
}
