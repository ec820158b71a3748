use std::fmt;
use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::grading::{Feedback, grade_choice, grade_free_text};
use crate::model::{Chapter, ChapterId, Question, QuestionBank};
use crate::random::shuffled;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("chapter not found: {0}")]
    ChapterNotFound(ChapterId),

    #[error("session has no current question")]
    NoCurrentQuestion,

    #[error("{option:?} is not an option of the current question")]
    UnknownOption { option: String },

    #[error("operation requires {expected} mode, session is in {actual} mode")]
    ModeMismatch {
        expected: AnswerMode,
        actual: AnswerMode,
    },
}

//
// ─── ANSWER MODE ──────────────────────────────────────────────────────────────
//

/// How answers are collected and evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerMode {
    /// Pick one of the displayed options; exact match.
    #[default]
    Objective,
    /// Type an answer; normalized containment.
    Subjective,
}

impl AnswerMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AnswerMode::Objective => AnswerMode::Subjective,
            AnswerMode::Subjective => AnswerMode::Objective,
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMode::Objective => f.write_str("Objective"),
            AnswerMode::Subjective => f.write_str("Subjective"),
        }
    }
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Read-only view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    pub position: usize,
    pub total: usize,
    /// `(position + 1) / total`, `None` for an empty session.
    pub fraction: Option<f64>,
    pub is_first: bool,
    pub is_last: bool,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Result of [`Session::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved to the next question.
    Moved(Session),
    /// Already on the last question. The session is returned unchanged.
    Complete(Session),
}

impl Advance {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Advance::Complete(_))
    }

    #[must_use]
    pub fn into_session(self) -> Session {
        match self {
            Advance::Moved(session) | Advance::Complete(session) => session,
        }
    }
}

/// One randomized traversal of a chapter.
///
/// A `Session` is an immutable value: every transition returns a new session
/// and leaves `self` untouched. Question order and option order are fixed
/// when the session is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    chapter_id: ChapterId,
    questions: Arc<[Question]>,
    position: usize,
    mode: AnswerMode,
    selection: Option<String>,
    draft: String,
    feedback: Option<Feedback>,
}

/// Build a session for `chapter_id` from a repository snapshot.
///
/// # Errors
///
/// Returns `SessionError::ChapterNotFound` if no chapter has that identifier.
pub fn create_session<R: Rng + ?Sized>(
    chapter_id: &ChapterId,
    bank: &QuestionBank,
    rng: &mut R,
) -> Result<Session, SessionError> {
    let chapter = bank
        .chapter(chapter_id)
        .ok_or_else(|| SessionError::ChapterNotFound(chapter_id.clone()))?;
    Ok(Session::from_chapter(chapter, rng))
}

impl Session {
    /// Shuffle the chapter's questions, and each question's options, into a
    /// new session positioned on the first question in Objective mode.
    #[must_use]
    pub fn from_chapter<R: Rng + ?Sized>(chapter: &Chapter, rng: &mut R) -> Self {
        let questions: Vec<Question> = shuffled(chapter.questions(), rng)
            .into_iter()
            .map(|q| {
                let options = shuffled(q.options(), rng);
                q.with_options(options)
            })
            .collect();

        Self {
            chapter_id: chapter.id().clone(),
            questions: questions.into(),
            position: 0,
            mode: AnswerMode::default(),
            selection: None,
            draft: String::new(),
            feedback: None,
        }
    }

    // ─── accessors ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter_id
    }

    /// Questions in presentation order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A chapter with zero questions yields an empty session with no current question.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    #[must_use]
    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.questions.len()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some((self.position + 1) as f64 / self.questions.len() as f64)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.position,
            total: self.len(),
            fraction: self.progress_fraction(),
            is_first: self.is_first(),
            is_last: self.is_last(),
        }
    }

    // ─── answering ─────────────────────────────────────────────────────────

    /// Select an option of the current question and grade it.
    ///
    /// Selecting again simply replaces the previous selection and feedback.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ModeMismatch` outside Objective mode,
    /// `SessionError::NoCurrentQuestion` for an empty session, and
    /// `SessionError::UnknownOption` if `option` is not displayed.
    pub fn select_option(&self, option: &str) -> Result<Self, SessionError> {
        self.require_mode(AnswerMode::Objective)?;
        let question = self.require_question()?;
        if !question.has_option(option) {
            return Err(SessionError::UnknownOption {
                option: option.to_owned(),
            });
        }

        let feedback = grade_choice(question, option);
        Ok(Self {
            selection: Some(option.to_owned()),
            feedback: Some(feedback),
            ..self.clone()
        })
    }

    /// Replace the free-text buffer without grading it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ModeMismatch` outside Subjective mode.
    pub fn edit_draft(&self, text: impl Into<String>) -> Result<Self, SessionError> {
        self.require_mode(AnswerMode::Subjective)?;
        Ok(Self {
            draft: text.into(),
            ..self.clone()
        })
    }

    /// Store `text` as the draft and grade it against the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ModeMismatch` outside Subjective mode and
    /// `SessionError::NoCurrentQuestion` for an empty session.
    pub fn submit_free_text(&self, text: impl Into<String>) -> Result<Self, SessionError> {
        self.require_mode(AnswerMode::Subjective)?;
        let question = self.require_question()?;
        let draft = text.into();

        let feedback = grade_free_text(question, &draft);
        Ok(Self {
            draft,
            feedback: Some(feedback),
            ..self.clone()
        })
    }

    /// Grade the current draft.
    ///
    /// # Errors
    ///
    /// Same as [`Session::submit_free_text`].
    pub fn submit_draft(&self) -> Result<Self, SessionError> {
        self.submit_free_text(self.draft.clone())
    }

    // ─── navigation ────────────────────────────────────────────────────────

    /// Move to the next question, or report completion on the last one.
    #[must_use]
    pub fn advance(&self) -> Advance {
        if self.is_last() {
            return Advance::Complete(self.clone());
        }
        Advance::Moved(self.moved_to(self.position + 1))
    }

    /// Move to the previous question. No-op on the first question.
    #[must_use]
    pub fn retreat(&self) -> Self {
        if self.is_first() {
            return self.clone();
        }
        self.moved_to(self.position - 1)
    }

    /// Flip between Objective and Subjective mode, clearing answer state.
    #[must_use]
    pub fn toggle_mode(&self) -> Self {
        Self {
            mode: self.mode.toggled(),
            ..self.cleared()
        }
    }

    // ─── helpers ───────────────────────────────────────────────────────────

    fn moved_to(&self, position: usize) -> Self {
        Self {
            position,
            ..self.cleared()
        }
    }

    fn cleared(&self) -> Self {
        Self {
            chapter_id: self.chapter_id.clone(),
            questions: Arc::clone(&self.questions),
            position: self.position,
            mode: self.mode,
            selection: None,
            draft: String::new(),
            feedback: None,
        }
    }

    fn require_mode(&self, expected: AnswerMode) -> Result<(), SessionError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(SessionError::ModeMismatch {
                expected,
                actual: self.mode,
            })
        }
    }

    fn require_question(&self) -> Result<&Question, SessionError> {
        self.current_question()
            .ok_or(SessionError::NoCurrentQuestion)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
