use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::output::CSV_EXTENSION;
use crate::error::Result;
use crate::exchange::symbols::csv_file_stem;

use super::normalizer::{to_csv, NormalizedRow};

/// Directory of per-symbol CSV files. Each symbol owns exactly one file.
#[derive(Clone, Debug)]
pub struct CsvStore {
    data_dir: PathBuf,
    header: bool,
}

impl CsvStore {
    pub fn new(data_dir: impl Into<PathBuf>, header: bool) -> Self {
        Self {
            data_dir: data_dir.into(),
            header,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", csv_file_stem(symbol), CSV_EXTENSION))
    }

    /// Overwrites the symbol's file with `rows`.
    pub fn write_symbol(&self, symbol: &str, rows: &[NormalizedRow]) -> Result<PathBuf> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.path_for(symbol);
        let bytes = to_csv(rows, self.header)?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Every `*.csv` directly under the data directory, sorted by name.
    pub fn csv_files(&self) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.data_dir)?
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                let is_csv = path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(CSV_EXTENSION);
                is_csv.then_some(path)
            })
            .collect();
        files.sort();
        Ok(files)
    }

    /// Truncates every CSV in the data directory to empty. A missing
    /// directory is logged and treated as nothing to clear.
    pub fn clear_all(&self) -> Result<Vec<PathBuf>> {
        if !self.data_dir.is_dir() {
            warn!(
                "The folder {} does not exist or is not a directory",
                self.data_dir.display()
            );
            return Ok(Vec::new());
        }

        let files = self.csv_files()?;
        for path in &files {
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(path)?;
            info!(file = %path.display(), "Cleared the contents of CSV file");
        }
        Ok(files)
    }
}
