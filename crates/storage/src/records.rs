//! Wire shape of the question corpus and its conversion into the domain.
//!
//! The corpus is a JSON array:
//! `[{ "chapter": "...", "questions": [{ "question": "...", "options": ["..."], "answer": "..." }] }]`

use quiz_core::model::{Chapter, QuestionBank, QuestionDraft};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// Persisted shape for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            prompt: self.question,
            options: self.options,
            correct_answer: self.answer,
        }
    }
}

/// Persisted shape for a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub chapter: String,
    pub questions: Vec<QuestionRecord>,
}

impl ChapterRecord {
    /// Convert the record into a domain `Chapter`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` naming the first question that fails validation.
    pub fn into_chapter(self) -> Result<Chapter, StorageError> {
        let chapter = self.chapter;
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_draft()
                    .validate()
                    .map_err(|source| StorageError::Malformed {
                        chapter: chapter.clone(),
                        index,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Chapter::new(chapter, questions))
    }
}

/// Validate every record and assemble the snapshot.
///
/// # Errors
///
/// Returns `StorageError::Malformed` if any question is invalid.
pub fn records_into_bank(
    records: impl IntoIterator<Item = ChapterRecord>,
) -> Result<QuestionBank, StorageError> {
    let chapters = records
        .into_iter()
        .map(ChapterRecord::into_chapter)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionBank::new(chapters))
}

/// Parse and validate a JSON corpus.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not the expected shape,
/// or `StorageError::Malformed` if a question is invalid.
pub fn parse_bank(json: &str) -> Result<QuestionBank, StorageError> {
    let records: Vec<ChapterRecord> =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
    records_into_bank(records)
}
