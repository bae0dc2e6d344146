use crate::error::{LangRankError, LrResult};
use crate::language::{DocumentProfile, LanguageId, LanguageProfile};
use crate::profile::RankedProfile;
use serde::Serialize;

/// Out-of-place distance of `document` from `reference`.
///
/// Only the document's symbols are visited. A symbol missing from `reference`
/// costs `document.len() + 1`; symbols only `reference` knows cost nothing.
pub fn out_of_place_distance(document: &RankedProfile, reference: &RankedProfile) -> u64 {
    let penalty = document.len() as u64 + 1;

    document
        .iter()
        .map(|(symbol, doc_rank)| match reference.rank_of(symbol) {
            Some(ref_rank) => u64::from(doc_rank.abs_diff(ref_rank)),
            None => penalty,
        })
        .sum()
}

pub fn score(document: &DocumentProfile, language: &LanguageProfile) -> u64 {
    out_of_place_distance(&document.profile, &language.profile)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub score: u64,
    pub language: LanguageId,
}

/// Candidate languages ordered by ascending score, ties by language id.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    entries: Vec<RankEntry>,
}

impl Ranking {
    fn from_scores(mut entries: Vec<RankEntry>) -> LrResult<Self> {
        if entries.is_empty() {
            return Err(LangRankError::NoCandidates);
        }
        entries.sort_by(|a, b| {
            a.score
                .cmp(&b.score)
                .then_with(|| a.language.cmp(&b.language))
        });
        Ok(Self { entries })
    }

    /// Lowest-scoring entry.
    pub fn predicted(&self) -> &RankEntry {
        &self.entries[0]
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn score_of(&self, language: &LanguageId) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| &e.language == language)
            .map(|e| e.score)
    }
}

impl IntoIterator for Ranking {
    type Item = RankEntry;
    type IntoIter = std::vec::IntoIter<RankEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Scores `document` against every candidate and orders the results.
///
/// Fails with `NoCandidates` when `languages` is empty.
pub fn rank_languages(
    document: &DocumentProfile,
    languages: &[LanguageProfile],
) -> LrResult<Ranking> {
    let entries = languages
        .iter()
        .map(|language| RankEntry {
            score: score(document, language),
            language: language.language.clone(),
        })
        .collect();

    Ranking::from_scores(entries)
}
