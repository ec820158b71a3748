use std::path::PathBuf;
use std::sync::Arc;

use quiz_core::RandomSource;
use storage::{HttpRepository, JsonFileRepository, QuestionRepository};

use crate::error::ConfigError;
use crate::sessions::QuizService;

/// Environment variable naming the corpus: a file path or an http(s) URL.
pub const QUESTIONS_ENV: &str = "QUIZ_QUESTIONS";
/// Environment variable fixing the shuffle seed.
pub const SEED_ENV: &str = "QUIZ_SHUFFLE_SEED";
pub const DEFAULT_QUESTIONS_PATH: &str = "data/questions.json";

/// Where the question corpus is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    Http(String),
}

impl QuestionSource {
    /// Interpret `raw` as a URL when it has an http(s) scheme, otherwise as a path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySource` for a blank value.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptySource);
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(Self::Http(raw.to_owned()))
        } else {
            Ok(Self::File(PathBuf::from(raw)))
        }
    }

    #[must_use]
    pub fn repository(&self) -> Arc<dyn QuestionRepository> {
        match self {
            QuestionSource::File(path) => Arc::new(JsonFileRepository::new(path.clone())),
            QuestionSource::Http(url) => Arc::new(HttpRepository::new(url.clone())),
        }
    }
}

impl Default for QuestionSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_QUESTIONS_PATH))
    }
}

/// Runtime configuration for the quiz services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizConfig {
    pub source: QuestionSource,
    pub random: RandomSource,
}

impl QuizConfig {
    /// Read `QUIZ_QUESTIONS` and `QUIZ_SHUFFLE_SEED` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySource` for a blank source and
    /// `ConfigError::InvalidSeed` for a seed that is not a `u64`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let source = match lookup(QUESTIONS_ENV) {
            Some(raw) => QuestionSource::parse(&raw)?,
            None => QuestionSource::default(),
        };
        let random = match lookup(SEED_ENV) {
            Some(raw) => {
                let seed = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { raw })?;
                RandomSource::seeded(seed)
            }
            None => RandomSource::entropy(),
        };
        Ok(Self { source, random })
    }

    #[must_use]
    pub fn repository(&self) -> Arc<dyn QuestionRepository> {
        self.source.repository()
    }

    /// Build a `QuizService` wired to the configured source.
    #[must_use]
    pub fn service(&self) -> QuizService {
        QuizService::new(self.repository()).with_random(self.random)
    }
}
