use crate::error::{LangRankError, LrResult};
use crate::language::LanguageId;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

/// Supplies the raw training text for a language.
pub trait CorpusSource: Send + Sync {
    fn read_text(&self, language: &LanguageId) -> LrResult<String>;
}

/// Language → corpus file, as given by the caller.
#[derive(Debug, Clone, Default)]
pub struct CorpusMap {
    paths: HashMap<LanguageId, PathBuf>,
}

impl CorpusMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: LanguageId, path: impl Into<PathBuf>) {
        self.paths.insert(language, path.into());
    }

    pub fn path_of(&self, language: &LanguageId) -> Option<&Path> {
        self.paths.get(language).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<LanguageSpec> for CorpusMap {
    fn from_iter<I: IntoIterator<Item = LanguageSpec>>(iter: I) -> Self {
        let mut map = CorpusMap::new();
        for spec in iter {
            map.insert(spec.language, spec.corpus);
        }
        map
    }
}

impl CorpusSource for CorpusMap {
    fn read_text(&self, language: &LanguageId) -> LrResult<String> {
        let path = self.path_of(language).ok_or_else(|| {
            LangRankError::storage(
                format!("corpus for '{}'", language),
                io::Error::new(io::ErrorKind::NotFound, "no corpus registered"),
            )
        })?;

        read_text_file(path)
    }
}

/// Reads a text file, decoding invalid UTF-8 lossily.
pub fn read_text_file(path: &Path) -> LrResult<String> {
    let bytes = fs::read(path).map_err(|e| LangRankError::storage(path.display().to_string(), e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "⚠️  '{}' is not valid UTF-8; undecodable bytes were replaced.",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Corpus texts held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    texts: HashMap<LanguageId, String>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, language: LanguageId, text: impl Into<String>) -> Self {
        self.texts.insert(language, text.into());
        self
    }

    pub fn insert(&mut self, language: LanguageId, text: impl Into<String>) {
        self.texts.insert(language, text.into());
    }
}

impl CorpusSource for InMemoryCorpus {
    fn read_text(&self, language: &LanguageId) -> LrResult<String> {
        self.texts.get(language).cloned().ok_or_else(|| {
            LangRankError::storage(
                format!("corpus for '{}'", language),
                io::Error::new(io::ErrorKind::NotFound, "no corpus registered"),
            )
        })
    }
}

/// A `NAME=PATH` candidate language given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    pub language: LanguageId,
    pub corpus: PathBuf,
}

impl FromStr for LanguageSpec {
    type Err = LangRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, path) = s.split_once('=').ok_or_else(|| {
            LangRankError::Config(format!("expected NAME=PATH, got '{}'", s))
        })?;

        let path = path.trim();
        if path.is_empty() {
            return Err(LangRankError::Config(format!(
                "missing corpus path for '{}'",
                name.trim()
            )));
        }

        Ok(Self {
            language: LanguageId::new(name)?,
            corpus: PathBuf::from(path),
        })
    }
}
