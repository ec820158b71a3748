use std::fmt;
use std::sync::Arc;

use quiz_core::RandomSource;
use quiz_core::model::{ChapterId, Session, SessionError, create_session};
use storage::QuestionRepository;

use crate::error::LoadError;

/// Loads question snapshots and builds sessions from them.
///
/// Every call fetches a fresh snapshot; session construction itself is
/// synchronous once the snapshot is available.
#[derive(Clone)]
pub struct QuizService {
    repository: Arc<dyn QuestionRepository>,
    random: RandomSource,
}

impl QuizService {
    #[must_use]
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self {
            repository,
            random: RandomSource::default(),
        }
    }

    /// Use a specific random source for shuffling.
    #[must_use]
    pub fn with_random(mut self, random: RandomSource) -> Self {
        self.random = random;
        self
    }

    #[must_use]
    pub fn random(&self) -> RandomSource {
        self.random
    }

    /// Chapter identifiers available for selection, in source order.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::RepositoryUnavailable` if the corpus cannot be read.
    pub async fn list_chapters(&self) -> Result<Vec<ChapterId>, LoadError> {
        let bank = self.repository.fetch_bank().await?;
        Ok(bank.chapter_ids())
    }

    /// Start a new randomized session for the given chapter.
    ///
    /// A chapter without questions yields an empty session rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::ChapterNotFound` for an unknown chapter and
    /// `LoadError::RepositoryUnavailable` if the corpus cannot be read.
    pub async fn start_session(&self, chapter_id: &ChapterId) -> Result<Session, LoadError> {
        let bank = self.repository.fetch_bank().await.inspect_err(|err| {
            tracing::warn!(chapter = %chapter_id, error = %err, "question corpus unavailable");
        })?;

        let session =
            create_session(chapter_id, &bank, &mut self.random.rng()).map_err(|err| match err {
                SessionError::ChapterNotFound(id) => {
                    tracing::info!(chapter = %id, "chapter not found");
                    LoadError::ChapterNotFound(id)
                }
                other => LoadError::Session(other),
            })?;

        tracing::debug!(
            chapter = %chapter_id,
            questions = session.len(),
            "session created"
        );
        Ok(session)
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("random", &self.random)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
