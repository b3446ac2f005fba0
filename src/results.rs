use std::path::Path;

use crate::errors::BenchError;
use crate::types::{ResultFile, ResultSet};

impl ResultSet {
    /// Pretty-printed JSON, two-space indent.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Decode either the wrapped `{"results": [...], "stats": {...}}` shape or
    /// a bare array of measurements.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        Ok(ResultFile::from_json(s)?.into())
    }

    pub fn read_from(path: &Path) -> Result<Self, BenchError> {
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ResultsRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|e| BenchError::ResultsParse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// Write the set as JSON, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<(), BenchError> {
        let write_err = |source| BenchError::ResultsWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, self.to_json()).map_err(write_err)
    }
}
