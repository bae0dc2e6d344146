use crate::error::{LangRankError, LrResult};
use crate::profile::{CharNgrams, MAX_NGRAM};
use crate::store::{FileStore, ProfileFormat};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub profile: ProfileParams,
    #[command(flatten)]
    pub store: StoreParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileParams {
    /// Symbol length in characters (1 = single characters)
    #[arg(long, default_value_t = 1)]
    pub ngram: usize,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self { ngram: 1 }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreParams {
    /// Directory holding trained language profiles
    #[arg(long, default_value = "models")]
    pub models_dir: PathBuf,

    /// On-disk profile format (tsv or json)
    #[arg(long, default_value = "tsv")]
    pub format: ProfileFormat,
}

impl Default for StoreParams {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            format: ProfileFormat::Tsv,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LrResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LangRankError::storage(path.display().to_string(), e))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| LangRankError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Overlays only the flags the user actually typed onto `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(profile.ngram, "ngram");
        update_if_present!(store.models_dir, "models_dir");
        update_if_present!(store.format, "format");
    }

    pub fn validate(&self) -> LrResult<()> {
        if self.profile.ngram == 0 || self.profile.ngram > MAX_NGRAM {
            return Err(LangRankError::Config(format!(
                "--ngram must be between 1 and {}, got {}",
                MAX_NGRAM, self.profile.ngram
            )));
        }
        Ok(())
    }
}

impl ProfileParams {
    pub fn extractor(&self) -> LrResult<CharNgrams> {
        CharNgrams::new(self.ngram)
    }
}

impl StoreParams {
    /// Profiles are kept per symbol length so different `ngram` settings
    /// never read each other's files.
    pub fn profile_dir(&self, ngram: usize) -> PathBuf {
        self.models_dir.join(format!("{}-gram", ngram))
    }

    pub fn open(&self, ngram: usize) -> FileStore {
        FileStore::new(self.profile_dir(ngram), self.format)
    }
}
