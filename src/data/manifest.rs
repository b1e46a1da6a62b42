use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Symbol metadata consumed by chart rendering. The three arrays are
/// index-aligned and always the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub symbol: Vec<String>,
    pub pricescale: Vec<u32>,
    pub description: Vec<String>,
}

impl Manifest {
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S], price_scale: u32) -> Self {
        let symbol: Vec<String> = symbols.iter().map(|s| s.as_ref().to_string()).collect();
        let pricescale = vec![price_scale; symbol.len()];
        let description = symbol.iter().map(|s| describe(s)).collect();
        Self {
            symbol,
            pricescale,
            description,
        }
    }

    pub fn len(&self) -> usize {
        self.symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }

    /// Overwrites `path` with the manifest, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn describe(symbol: &str) -> String {
    format!("Description for {}", symbol)
}
