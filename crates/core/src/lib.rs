#![forbid(unsafe_code)]

pub mod error;
pub mod grading;
pub mod model;
pub mod random;

pub use error::Error;
pub use random::RandomSource;
