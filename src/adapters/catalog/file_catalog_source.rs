//! File-based Catalog Source
//!
//! Reads `profiles.{json,yaml}` and `questions.{json,yaml}` from a data
//! directory. A missing file yields an empty list and a warning, so a
//! directory holding only questions still loads.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::domain::catalog::{Profile, Question};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{CatalogSnapshot, CatalogSource};

/// On-disk encoding of the catalog files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    #[default]
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Yaml => "yaml",
        }
    }
}

/// Errors raised while reading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid record in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate id '{id}' in {path}")]
    DuplicateId { path: PathBuf, id: String },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::Io { .. } => ErrorCode::StorageError,
            CatalogError::Parse { .. }
            | CatalogError::Invalid { .. }
            | CatalogError::DuplicateId { .. } => ErrorCode::ValidationFailed,
        };
        let path = match &err {
            CatalogError::Io { path, .. }
            | CatalogError::Parse { path, .. }
            | CatalogError::Invalid { path, .. }
            | CatalogError::DuplicateId { path, .. } => path.display().to_string(),
        };
        DomainError::new(code, err.to_string()).with_detail("path", path)
    }
}

/// Catalog source backed by files in a data directory
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    data_dir: PathBuf,
    format: CatalogFormat,
}

impl FileCatalogSource {
    pub fn new(data_dir: impl AsRef<Path>, format: CatalogFormat) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            format,
        }
    }

    fn file_path(&self, stem: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", stem, self.format.extension()))
    }

    /// Reads a list of records, or an empty list when the file is absent.
    async fn read_records<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, CatalogError> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Catalog file not found, nothing loaded from it");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let parsed = match self.format {
            CatalogFormat::Json => serde_json::from_str(&raw).map_err(|e| e.to_string()),
            CatalogFormat::Yaml => serde_yaml::from_str(&raw).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    async fn load_profiles(&self) -> Result<Vec<Profile>, CatalogError> {
        let path = self.file_path("profiles");
        let mut profiles: Vec<Profile> = self.read_records(&path).await?;

        let mut seen = HashSet::new();
        for profile in &mut profiles {
            profile.validate().map_err(|source| CatalogError::Invalid {
                path: path.clone(),
                source,
            })?;
            if !seen.insert(profile.id().clone()) {
                return Err(CatalogError::DuplicateId {
                    path,
                    id: profile.id().to_string(),
                });
            }
            profile.reset_usage();
        }

        tracing::info!(path = %path.display(), count = profiles.len(), "Loaded profiles");
        Ok(profiles)
    }

    async fn load_questions(&self) -> Result<Vec<Question>, CatalogError> {
        let path = self.file_path("questions");
        let mut questions: Vec<Question> = self.read_records(&path).await?;

        let mut seen = HashSet::new();
        for question in &mut questions {
            question.validate().map_err(|source| CatalogError::Invalid {
                path: path.clone(),
                source,
            })?;
            if !seen.insert(question.id().clone()) {
                return Err(CatalogError::DuplicateId {
                    path,
                    id: question.id().to_string(),
                });
            }
            question.reset_usage();
        }

        tracing::info!(path = %path.display(), count = questions.len(), "Loaded questions");
        Ok(questions)
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<CatalogSnapshot, DomainError> {
        let profiles = self.load_profiles().await?;
        let questions = self.load_questions().await?;
        Ok(CatalogSnapshot {
            profiles,
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Answer, QuestionId};
    use tempfile::TempDir;

    const PROFILES_JSON: &str = r#"[
        {
            "_id": "saas_cto",
            "name": "SaaS Startup CTO",
            "description": "Technical founder at an early-stage company",
            "attributes": { "company_size": "small", "technical_background": true },
            "marketing_recommendations": ["Lead with the API docs"],
            "answers": { "q_large_company": "no", "q_technical_background": "yes" },
            "frequency": 42
        },
        {
            "_id": "enterprise_buyer",
            "name": "Enterprise Buyer",
            "answers": { "q_large_company": "yes" }
        }
    ]"#;

    const QUESTIONS_JSON: &str = r#"[
        { "_id": "q_technical_background", "text": "Does your customer have a strong technical background?", "order": 4, "asked_count": 17 },
        { "_id": "q_large_company", "text": "Does your customer work at a large company?", "order": 1 }
    ]"#;

    async fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).await.unwrap();
    }

    #[tokio::test]
    async fn loads_json_catalog_and_resets_usage() {
        let dir = TempDir::new().unwrap();
        write(&dir, "profiles.json", PROFILES_JSON).await;
        write(&dir, "questions.json", QUESTIONS_JSON).await;

        let snapshot = FileCatalogSource::new(dir.path(), CatalogFormat::Json)
            .load()
            .await
            .unwrap();

        assert_eq!(snapshot.profiles.len(), 2);
        assert_eq!(snapshot.profiles[0].id().as_str(), "saas_cto");
        assert_eq!(snapshot.profiles[0].frequency(), 0);
        assert_eq!(
            snapshot.profiles[0].expected_answer(&QuestionId::new("q_technical_background").unwrap()),
            Some(Answer::Yes)
        );
        assert_eq!(snapshot.questions.len(), 2);
        assert_eq!(snapshot.questions[0].asked_count(), 0);
    }

    #[tokio::test]
    async fn loads_yaml_catalog() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "questions.yaml",
            "- _id: q1\n  text: Is your customer budget-conscious?\n  order: 3\n",
        )
        .await;

        let snapshot = FileCatalogSource::new(dir.path(), CatalogFormat::Yaml)
            .load()
            .await
            .unwrap();

        assert!(snapshot.profiles.is_empty());
        assert_eq!(snapshot.questions[0].order(), 3);
    }

    #[tokio::test]
    async fn missing_files_give_empty_catalog() {
        let dir = TempDir::new().unwrap();

        let snapshot = FileCatalogSource::new(dir.path(), CatalogFormat::Json)
            .load()
            .await
            .unwrap();

        assert_eq!(snapshot, CatalogSnapshot::default());
    }

    #[tokio::test]
    async fn unknown_answer_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "profiles.json",
            r#"[{ "_id": "p", "name": "P", "answers": { "q1": "maybe" } }]"#,
        )
        .await;

        let err = FileCatalogSource::new(dir.path(), CatalogFormat::Json)
            .load()
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("profiles.json"));
    }

    #[tokio::test]
    async fn missing_identity_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "questions.json", r#"[{ "_id": "  ", "text": "Blank id?" }]"#).await;

        let result = FileCatalogSource::new(dir.path(), CatalogFormat::Json)
            .load()
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "questions.json",
            r#"[{ "_id": "q1", "text": "A?" }, { "_id": "q1", "text": "B?" }]"#,
        )
        .await;

        let err = FileCatalogSource::new(dir.path(), CatalogFormat::Json)
            .load()
            .await
            .unwrap_err();

        assert!(err.message.contains("Duplicate id 'q1'"));
    }

    #[tokio::test]
    async fn blank_question_text_is_invalid() {
        let dir = TempDir::new().unwrap();
        write(&dir, "questions.json", r#"[{ "_id": "q1", "text": "" }]"#).await;

        let err = FileCatalogSource::new(dir.path(), CatalogFormat::Json)
            .load()
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("path").map(|p| p.ends_with("questions.json")), Some(true));
    }
}
