//! Catalog data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::ValidationError;
use crate::adapters::CatalogFormat;

/// Where seed profiles and questions are read from
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `profiles.<ext>` and `questions.<ext>`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File encoding (`json` or `yaml`)
    #[serde(default)]
    pub format: CatalogFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            format: CatalogFormat::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}
