use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Symbol occurrence counts for a single text sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyCount {
    counts: HashMap<String, u64>,
}

impl FrequencyCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: impl Into<String>) {
        *self.counts.entry(symbol.into()).or_default() += 1;
    }

    pub fn get(&self, symbol: &str) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Ranks symbols by descending count, starting at 1.
    ///
    /// Equal counts are ordered by the symbol's lexical order, so the result
    /// does not depend on hash map iteration order.
    pub fn into_ranked(self) -> RankedProfile {
        let mut entries: Vec<(String, u64)> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let ranks = entries
            .into_iter()
            .enumerate()
            .map(|(i, (symbol, _))| (symbol, i as u32 + 1))
            .collect();

        RankedProfile { ranks }
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyCount {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut freq = FrequencyCount::new();
        for symbol in iter {
            freq.add(symbol);
        }
        freq
    }
}

/// Why a stored profile was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileDefect {
    #[error("empty symbol at rank {rank}")]
    EmptySymbol { rank: i64 },

    #[error("symbol '{symbol}' has non-positive rank {rank}")]
    NonPositiveRank { symbol: String, rank: i64 },

    #[error("symbol '{symbol}' has rank {rank} but the profile only holds {size} symbols")]
    RankOutOfRange { symbol: String, rank: i64, size: usize },

    #[error("rank {rank} is assigned more than once")]
    DuplicateRank { rank: i64 },

    #[error("symbol '{symbol}' appears more than once")]
    DuplicateSymbol { symbol: String },

    #[error("unreadable data: {0}")]
    Malformed(String),
}

/// Symbol → rank mapping, 1 being the most frequent symbol.
///
/// Ranks always form the permutation `1..=len()`. The profile cannot be
/// modified once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedProfile {
    ranks: HashMap<String, u32>,
}

impl RankedProfile {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuilds a profile from stored `(symbol, rank)` pairs, rejecting
    /// anything that is not a permutation of `1..=K` over distinct symbols.
    pub fn from_entries<I>(entries: I) -> Result<Self, ProfileDefect>
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        let entries: Vec<(String, i64)> = entries.into_iter().collect();
        let size = entries.len();

        let mut ranks = HashMap::with_capacity(size);
        let mut seen_ranks = HashSet::with_capacity(size);

        for (symbol, rank) in entries {
            if symbol.is_empty() {
                return Err(ProfileDefect::EmptySymbol { rank });
            }
            if rank <= 0 {
                return Err(ProfileDefect::NonPositiveRank { symbol, rank });
            }
            if rank as u64 > size as u64 {
                return Err(ProfileDefect::RankOutOfRange { symbol, rank, size });
            }
            if !seen_ranks.insert(rank) {
                return Err(ProfileDefect::DuplicateRank { rank });
            }
            if ranks.contains_key(&symbol) {
                return Err(ProfileDefect::DuplicateSymbol { symbol });
            }
            ranks.insert(symbol, rank as u32);
        }

        Ok(Self { ranks })
    }

    pub fn rank_of(&self, symbol: &str) -> Option<u32> {
        self.ranks.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.ranks.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Unordered view of every `(symbol, rank)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.ranks.iter().map(|(s, &r)| (s.as_str(), r))
    }

    /// Symbols listed from rank 1 upwards.
    pub fn by_rank(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by_key(|&(_, rank)| rank);
        entries
    }
}
