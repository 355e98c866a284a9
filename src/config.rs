// Sat Oct 17 2026 - Alex

use crate::memory::AddressWidth;
use crate::table::{ColumnType, MemoryTable, TableError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Serializable description of a memory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Address size in bytes: 1, 2, 4 or 8.
    pub address_width: usize,
    /// Column names, see [`ColumnType`]'s `FromStr` for the accepted spellings.
    pub columns: Vec<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            address_width: AddressWidth::native().bytes(),
            columns: vec!["bool".to_string(), "hex".to_string()],
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address_width(mut self, bytes: usize) -> Self {
        self.address_width = bytes;
        self
    }

    pub fn with_columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: TableConfig = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        log::debug!("Loaded table config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn column_types(&self) -> Result<Vec<ColumnType>, TableError> {
        self.columns.iter().map(|name| name.parse::<ColumnType>()).collect()
    }

    pub fn build(&self) -> Result<MemoryTable, TableError> {
        let address_width = AddressWidth::from_bytes(self.address_width)?;
        MemoryTable::new(address_width, &self.column_types()?)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
}
