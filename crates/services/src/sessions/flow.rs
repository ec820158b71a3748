use std::fmt;

use quiz_core::model::{Advance, ChapterId, Session, SessionError};

use super::service::QuizService;
use crate::error::{FlowError, LoadError};

//
// ─── SCREENS ──────────────────────────────────────────────────────────────────
//

/// Identifies one session load. Results carrying an outdated ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Message shown on chapter selection after a terminal session event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ChapterNotFound(ChapterId),
    QuizCompleted(ChapterId),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ChapterNotFound(id) => write!(f, "Chapter not found: {id}"),
            Notice::QuizCompleted(_) => f.write_str("Quiz completed!"),
        }
    }
}

/// Where the user currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    ChapterSelection {
        notice: Option<Notice>,
    },
    Loading {
        chapter: ChapterId,
        ticket: LoadTicket,
    },
    /// An empty session renders as "no questions found".
    InSession {
        session: Session,
    },
    Failed {
        chapter: ChapterId,
        message: String,
    },
}

/// Whether a finished load was applied to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Discarded,
}

/// Result of advancing inside a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Continue,
    /// The last question was passed; carries the final session state.
    Completed(Session),
}

//
// ─── FLOW ─────────────────────────────────────────────────────────────────────
//

/// Caller-held navigation state: chapter selection, loading, an active
/// session, or a failed load.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizFlow {
    screen: Screen,
    next_ticket: u64,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::ChapterSelection { notice: None },
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::InSession { session } => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading { .. })
    }

    /// Enter the loading state for `chapter`. Any earlier pending load is superseded.
    pub fn open_chapter(&mut self, chapter: ChapterId) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        tracing::debug!(chapter = %chapter, ?ticket, "opening chapter");
        self.screen = Screen::Loading { chapter, ticket };
        ticket
    }

    /// Apply the result of a load started with `ticket`.
    ///
    /// Results for a ticket that is no longer pending are discarded untouched.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Session, LoadError>,
    ) -> LoadOutcome {
        let chapter = match &self.screen {
            Screen::Loading {
                chapter,
                ticket: pending,
            } if *pending == ticket => chapter.clone(),
            _ => {
                tracing::debug!(?ticket, "discarding stale session load");
                return LoadOutcome::Discarded;
            }
        };

        self.screen = match result {
            Ok(session) => Screen::InSession { session },
            Err(LoadError::ChapterNotFound(id)) => Screen::ChapterSelection {
                notice: Some(Notice::ChapterNotFound(id)),
            },
            Err(err @ (LoadError::RepositoryUnavailable(_) | LoadError::Session(_))) => {
                Screen::Failed {
                    chapter,
                    message: err.to_string(),
                }
            }
        };
        LoadOutcome::Applied
    }

    /// Start loading the failed chapter again.
    ///
    /// Returns `None` unless the flow is in the failed state.
    pub fn retry(&mut self) -> Option<(ChapterId, LoadTicket)> {
        let Screen::Failed { chapter, .. } = &self.screen else {
            return None;
        };
        let chapter = chapter.clone();
        let ticket = self.open_chapter(chapter.clone());
        Some((chapter, ticket))
    }

    /// Leave whatever is on screen and return to chapter selection.
    pub fn back_to_chapters(&mut self) {
        self.screen = Screen::ChapterSelection { notice: None };
    }

    /// Open `chapter` and load it through `service` in one step.
    pub async fn load_chapter(&mut self, service: &QuizService, chapter: ChapterId) -> LoadOutcome {
        let ticket = self.open_chapter(chapter.clone());
        let result = service.start_session(&chapter).await;
        self.finish_load(ticket, result)
    }

    // ─── session commands ──────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `FlowError::NotInSession` outside a session, or the session's usage error.
    pub fn select_option(&mut self, option: &str) -> Result<&Session, FlowError> {
        self.update(|s| s.select_option(option))
    }

    /// # Errors
    ///
    /// Returns `FlowError::NotInSession` outside a session, or the session's usage error.
    pub fn edit_draft(&mut self, text: impl Into<String>) -> Result<&Session, FlowError> {
        let text = text.into();
        self.update(|s| s.edit_draft(text))
    }

    /// # Errors
    ///
    /// Returns `FlowError::NotInSession` outside a session, or the session's usage error.
    pub fn submit_free_text(&mut self, text: impl Into<String>) -> Result<&Session, FlowError> {
        let text = text.into();
        self.update(|s| s.submit_free_text(text))
    }

    /// # Errors
    ///
    /// Returns `FlowError::NotInSession` outside a session, or the session's usage error.
    pub fn submit_draft(&mut self) -> Result<&Session, FlowError> {
        self.update(Session::submit_draft)
    }

    /// # Errors
    ///
    /// Returns `FlowError::NotInSession` outside a session.
    pub fn retreat(&mut self) -> Result<&Session, FlowError> {
        self.update(|s| Ok(s.retreat()))
    }

    /// # Errors
    ///
    /// Returns `FlowError::NotInSession` outside a session.
    pub fn toggle_mode(&mut self) -> Result<&Session, FlowError> {
        self.update(|s| Ok(s.toggle_mode()))
    }

    /// Move to the next question. Passing the last one completes the session
    /// and returns to chapter selection.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotInSession` outside a session.
    pub fn advance(&mut self) -> Result<Step, FlowError> {
        let Screen::InSession { session } = &self.screen else {
            return Err(FlowError::NotInSession);
        };

        match session.advance() {
            Advance::Moved(next) => {
                self.screen = Screen::InSession { session: next };
                Ok(Step::Continue)
            }
            Advance::Complete(done) => {
                tracing::info!(chapter = %done.chapter_id(), questions = done.len(), "quiz completed");
                self.screen = Screen::ChapterSelection {
                    notice: Some(Notice::QuizCompleted(done.chapter_id().clone())),
                };
                Ok(Step::Completed(done))
            }
        }
    }

    fn update(
        &mut self,
        transition: impl FnOnce(&Session) -> Result<Session, SessionError>,
    ) -> Result<&Session, FlowError> {
        let Screen::InSession { session } = &mut self.screen else {
            return Err(FlowError::NotInSession);
        };
        *session = transition(session)?;
        Ok(&*session)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
