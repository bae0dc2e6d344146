use crate::error::{LangRankError, LrResult};

/// Longest symbol, in characters, that `CharNgrams` will extract.
pub const MAX_NGRAM: usize = 5;

/// Turns raw text into the sequence of symbols counted for a profile.
///
/// Any `Fn(&str) -> Vec<String>` closure is an extractor, so callers can swap
/// in their own tokenisation without touching the builder or the ranking code.
pub trait SymbolExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<String>;
}

impl<F> SymbolExtractor for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn extract(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Character n-grams taken inside whitespace-separated words.
///
/// Whitespace never appears in a symbol. With `n == 1` every non-whitespace
/// character is a symbol; words shorter than `n` contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharNgrams {
    n: usize,
}

impl CharNgrams {
    pub fn new(n: usize) -> LrResult<Self> {
        if n == 0 || n > MAX_NGRAM {
            return Err(LangRankError::Config(format!(
                "ngram size must be between 1 and {}, got {}",
                MAX_NGRAM, n
            )));
        }
        Ok(Self { n })
    }

    pub fn unigrams() -> Self {
        Self { n: 1 }
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl Default for CharNgrams {
    fn default() -> Self {
        Self::unigrams()
    }
}

impl SymbolExtractor for CharNgrams {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut symbols = Vec::new();

        for word in text.split_whitespace() {
            if self.n == 1 {
                symbols.extend(word.chars().map(String::from));
                continue;
            }

            let chars: Vec<char> = word.chars().collect();
            symbols.extend(chars.windows(self.n).map(|w| w.iter().collect::<String>()));
        }

        symbols
    }
}
