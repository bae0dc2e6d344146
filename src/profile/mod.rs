pub mod builder;
pub mod extract;
pub mod ranked;

pub use self::builder::build_profile;
pub use self::extract::{CharNgrams, SymbolExtractor, MAX_NGRAM};
pub use self::ranked::{FrequencyCount, ProfileDefect, RankedProfile};
