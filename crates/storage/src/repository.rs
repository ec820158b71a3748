use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::{QuestionBank, QuestionError};
use thiserror::Error;

use crate::records::{ChapterRecord, records_into_bank};

/// Errors surfaced by repository adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question source unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("malformed question {index} in chapter {chapter:?}: {source}")]
    Malformed {
        chapter: String,
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Read interface of the question corpus.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch a validated snapshot of every chapter.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds malformed data.
    async fn fetch_bank(&self) -> Result<QuestionBank, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<ChapterRecord>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(records: Vec<ChapterRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Swap the stored corpus.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the lock is poisoned.
    pub fn replace_records(&self, records: Vec<ChapterRecord>) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = records;
        Ok(())
    }

    /// Make subsequent fetches fail with `reason`, or succeed again with `None`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the lock is poisoned.
    pub fn set_failure(&self, reason: Option<String>) -> Result<(), StorageError> {
        let mut guard = self
            .failure
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = reason;
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn fetch_bank(&self) -> Result<QuestionBank, StorageError> {
        if let Some(reason) = self
            .failure
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?
            .clone()
        {
            return Err(StorageError::Unavailable(reason));
        }

        let records = self
            .records
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?
            .clone();
        records_into_bank(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::QuestionRecord;
    use quiz_core::model::ChapterId;

    fn record(chapter: &str, answers: &[&str]) -> ChapterRecord {
        ChapterRecord {
            chapter: chapter.into(),
            questions: answers
                .iter()
                .enumerate()
                .map(|(i, answer)| QuestionRecord {
                    question: format!("Q{i}"),
                    options: None,
                    answer: Some((*answer).to_owned()),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn fetches_validated_bank() {
        let repo = InMemoryRepository::new(vec![record("Rivers", &["Ganga", "Yamuna"])]);

        let bank = repo.fetch_bank().await.unwrap();
        let chapter = bank.chapter(&ChapterId::new("Rivers")).unwrap();
        assert_eq!(chapter.questions().len(), 2);
    }

    #[tokio::test]
    async fn replaced_records_are_visible_to_clones() {
        let repo = InMemoryRepository::new(Vec::new());
        let shared = repo.clone();
        repo.replace_records(vec![record("Lakes", &["Naini"])]).unwrap();

        let bank = shared.fetch_bank().await.unwrap();
        assert_eq!(bank.chapter_ids(), vec![ChapterId::new("Lakes")]);
    }

    #[tokio::test]
    async fn forced_failure_is_unavailable() {
        let repo = InMemoryRepository::new(vec![record("Rivers", &["Ganga"])]);
        repo.set_failure(Some("offline".into())).unwrap();

        let err = repo.fetch_bank().await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(ref reason) if reason == "offline"));

        repo.set_failure(None).unwrap();
        assert!(repo.fetch_bank().await.is_ok());
    }

    #[tokio::test]
    async fn malformed_record_fails_fetch() {
        let repo = InMemoryRepository::new(vec![ChapterRecord {
            chapter: "Rivers".into(),
            questions: vec![QuestionRecord {
                question: "Q".into(),
                options: Some(vec!["a".into()]),
                answer: None,
            }],
        }]);

        let err = repo.fetch_bank().await.unwrap_err();
        assert!(matches!(err, StorageError::Malformed { index: 0, .. }));
    }
}
