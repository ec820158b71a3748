use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::QuestionBank;

use crate::records::parse_bank;
use crate::repository::{QuestionRepository, StorageError};

/// Question corpus stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn fetch_bank(&self) -> Result<QuestionBank, StorageError> {
        tracing::debug!(path = %self.path.display(), "reading question corpus");
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StorageError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;
        let bank = parse_bank(&text)?;
        tracing::debug!(chapters = bank.len(), "question corpus loaded");
        Ok(bank)
    }
}
