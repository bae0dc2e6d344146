use crate::profile::extract::SymbolExtractor;
use crate::profile::ranked::{FrequencyCount, RankedProfile};
use tracing::debug;

/// Counts the symbols `extractor` pulls out of `text` and ranks them.
///
/// Empty or all-whitespace text produces an empty profile.
pub fn build_profile(text: &str, extractor: &dyn SymbolExtractor) -> RankedProfile {
    let freq: FrequencyCount = extractor.extract(text).into_iter().collect();
    let distinct = freq.len();
    let profile = freq.into_ranked();

    debug!(
        "   -> Profiled {} chars into {} distinct symbols.",
        text.chars().count(),
        distinct
    );

    profile
}
