#![forbid(unsafe_code)]

pub mod http;
pub mod json;
pub mod records;
pub mod repository;

pub use http::HttpRepository;
pub use json::JsonFileRepository;
pub use records::{ChapterRecord, QuestionRecord};
pub use repository::{InMemoryRepository, QuestionRepository, StorageError};
