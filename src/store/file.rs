use crate::error::{LangRankError, LrResult};
use crate::language::LanguageId;
use crate::profile::{ProfileDefect, RankedProfile};
use crate::store::{reject_document, ProfileFormat, ProfileRow, ProfileStore};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct StoredProfile {
    language: String,
    symbols: Vec<ProfileRow>,
}

/// One file per language under `dir`, named `<language>.<tsv|json>`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    format: ProfileFormat,
}

enum ReadFailure {
    Io(io::Error),
    Defect(ProfileDefect),
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, format: ProfileFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> ProfileFormat {
        self.format
    }

    pub fn path_for(&self, language: &LanguageId) -> PathBuf {
        self.dir.join(format!("{}.{}", language, self.format.extension()))
    }

    fn read_entries(
        &self,
        language: &LanguageId,
        path: &Path,
    ) -> Result<Vec<(String, i64)>, ReadFailure> {
        let file = File::open(path).map_err(ReadFailure::Io)?;
        let reader = BufReader::new(file);

        match self.format {
            ProfileFormat::Tsv => {
                let mut rdr = csv::ReaderBuilder::new()
                    .delimiter(b'\t')
                    .has_headers(true)
                    .from_reader(reader);

                let mut entries = Vec::new();
                for (row_idx, result) in rdr.deserialize::<ProfileRow>().enumerate() {
                    match result {
                        Ok(row) => entries.push((row.symbol, row.rank)),
                        Err(e) if e.is_io_error() => match e.into_kind() {
                            csv::ErrorKind::Io(io) => return Err(ReadFailure::Io(io)),
                            other => {
                                return Err(ReadFailure::Defect(ProfileDefect::Malformed(
                                    format!("{:?}", other),
                                )))
                            }
                        },
                        Err(e) => {
                            return Err(ReadFailure::Defect(ProfileDefect::Malformed(format!(
                                "row {}: {}",
                                row_idx + 1,
                                e
                            ))))
                        }
                    }
                }
                Ok(entries)
            }
            ProfileFormat::Json => {
                let stored: StoredProfile = serde_json::from_reader(reader).map_err(|e| {
                    if e.is_io() {
                        ReadFailure::Io(e.into())
                    } else {
                        ReadFailure::Defect(ProfileDefect::Malformed(e.to_string()))
                    }
                })?;

                if stored.language != language.as_str() {
                    return Err(ReadFailure::Defect(ProfileDefect::Malformed(format!(
                        "file holds the profile of '{}'",
                        stored.language
                    ))));
                }

                Ok(stored
                    .symbols
                    .into_iter()
                    .map(|row| (row.symbol, row.rank))
                    .collect())
            }
        }
    }

    /// Writes `profile` in this store's format to any writer.
    ///
    /// I/O failures are reported as `Storage` against the profile's path.
    pub fn write_profile<W: Write>(
        &self,
        language: &LanguageId,
        profile: &RankedProfile,
        writer: W,
    ) -> LrResult<()> {
        let rows: Vec<ProfileRow> = profile
            .by_rank()
            .into_iter()
            .map(|(symbol, rank)| ProfileRow {
                symbol: symbol.to_string(),
                rank: rank as i64,
            })
            .collect();

        match self.format {
            ProfileFormat::Tsv => {
                let mut wtr = csv::WriterBuilder::new()
                    .delimiter(b'\t')
                    .has_headers(false)
                    .from_writer(writer);
                wtr.write_record(["symbol", "rank"])
                    .map_err(|e| self.csv_write_error(language, e))?;
                for row in &rows {
                    wtr.serialize(row)
                        .map_err(|e| self.csv_write_error(language, e))?;
                }
                wtr.flush().map_err(|e| self.storage_error(language, e))?;
            }
            ProfileFormat::Json => {
                let stored = StoredProfile {
                    language: language.to_string(),
                    symbols: rows,
                };
                serde_json::to_writer_pretty(writer, &stored).map_err(|e| {
                    if e.is_io() {
                        self.storage_error(language, io::Error::from(e))
                    } else {
                        LangRankError::Json(e)
                    }
                })?;
            }
        }
        Ok(())
    }

    fn storage_error(&self, language: &LanguageId, e: io::Error) -> LangRankError {
        LangRankError::storage(self.path_for(language).display().to_string(), e)
    }

    fn csv_write_error(&self, language: &LanguageId, e: csv::Error) -> LangRankError {
        if !e.is_io_error() {
            return LangRankError::Csv(e);
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => self.storage_error(language, io),
            other => self.storage_error(language, io::Error::other(format!("{:?}", other))),
        }
    }
}

impl ProfileStore for FileStore {
    fn has(&self, language: &LanguageId) -> bool {
        self.path_for(language).is_file()
    }

    fn load(&self, language: &LanguageId) -> LrResult<RankedProfile> {
        let path = self.path_for(language);
        debug!("   Loading profile from: {}", path.display());

        let entries = self.read_entries(language, &path).map_err(|failure| match failure {
            ReadFailure::Io(e) => LangRankError::storage(path.display().to_string(), e),
            ReadFailure::Defect(defect) => LangRankError::corrupt(language.as_str(), defect),
        })?;

        RankedProfile::from_entries(entries)
            .map_err(|defect| LangRankError::corrupt(language.as_str(), defect))
    }

    fn save(&self, language: &LanguageId, profile: &RankedProfile) -> LrResult<()> {
        reject_document(language)?;

        let path = self.path_for(language);
        let resource = path.display().to_string();

        fs::create_dir_all(&self.dir)
            .map_err(|e| LangRankError::storage(self.dir.display().to_string(), e))?;

        let temp_file =
            NamedTempFile::new_in(&self.dir).map_err(|e| LangRankError::storage(&resource, e))?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            self.write_profile(language, profile, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LangRankError::storage(&resource, e))?;
        }
        temp_file
            .persist(&path)
            .map_err(|e| LangRankError::storage(&resource, e.error))?;

        debug!("   Saved profile to: {}", resource);
        Ok(())
    }
}
