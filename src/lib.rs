pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod language;
pub mod profile;
pub mod ranking;
pub mod store;

pub use crate::classifier::Classifier;
pub use crate::error::{LangRankError, LrResult};
pub use crate::language::{DocumentProfile, LanguageId, LanguageProfile, Provenance};
pub use crate::profile::{build_profile, CharNgrams, RankedProfile, SymbolExtractor};
pub use crate::ranking::{rank_languages, score, Ranking};
// cmd and reports live in the binary.
