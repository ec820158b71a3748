mod chapter;
mod ids;
mod question;
mod session;

pub use chapter::{Chapter, QuestionBank};
pub use ids::ChapterId;
pub use question::{Question, QuestionDraft, QuestionError};
pub use session::{
    Advance, AnswerMode, Session, SessionError, SessionProgress, create_session,
};
