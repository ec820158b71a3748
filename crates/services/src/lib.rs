#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sessions;

pub use quiz_core::RandomSource;
pub use sessions as session;

pub use config::{QuestionSource, QuizConfig};
pub use error::{ConfigError, FlowError, LoadError};
pub use sessions::{LoadOutcome, LoadTicket, Notice, QuizFlow, QuizService, Screen, Step};
