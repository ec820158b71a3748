mod flow;
mod service;

// Public API of the session subsystem.
pub use crate::error::{FlowError, LoadError};
pub use flow::{LoadOutcome, LoadTicket, Notice, QuizFlow, Screen, Step};
pub use service::QuizService;
