use std::collections::HashSet;

use thiserror::Error;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as supplied by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
}

impl QuestionDraft {
    /// Draft for a multiple-choice question.
    #[must_use]
    pub fn multiple_choice(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: Some(options.into_iter().map(Into::into).collect()),
            correct_answer: Some(correct_answer.into()),
        }
    }

    /// Draft for a question that can only be answered in free text.
    #[must_use]
    pub fn free_text(prompt: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: None,
            correct_answer: Some(correct_answer.into()),
        }
    }

    /// Check the draft's shape and produce an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::MissingAnswer` if the canonical answer is absent or blank.
    /// Returns `QuestionError::DuplicateOption` if an option appears twice.
    /// Returns `QuestionError::AnswerNotInOptions` if an options list is present, even
    /// an empty one, and omits the answer.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let correct_answer = self
            .correct_answer
            .filter(|answer| !answer.trim().is_empty())
            .ok_or(QuestionError::MissingAnswer)?;

        // Only an absent list marks a free-text question; a present list must hold the answer.
        let options = match self.options {
            None => Vec::new(),
            Some(options) => {
                let mut seen = HashSet::with_capacity(options.len());
                for option in &options {
                    if !seen.insert(option.as_str()) {
                        return Err(QuestionError::DuplicateOption {
                            option: option.clone(),
                        });
                    }
                }
                if !seen.contains(correct_answer.as_str()) {
                    return Err(QuestionError::AnswerNotInOptions {
                        answer: correct_answer,
                    });
                }
                options
            }
        };

        Ok(Question {
            prompt: self.prompt,
            options,
            correct_answer,
        })
    }
}

/// A validated, immutable question record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Candidate answers in display order. Empty for free-text-only questions.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Whether `option` is one of the displayed candidates.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Same question with its options in a new order.
    pub(crate) fn with_options(&self, options: Vec<String>) -> Self {
        debug_assert_eq!(options.len(), self.options.len());
        Self {
            prompt: self.prompt.clone(),
            options,
            correct_answer: self.correct_answer.clone(),
        }
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no correct answer")]
    MissingAnswer,

    #[error("correct answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_fails_without_answer() {
        let draft = QuestionDraft {
            prompt: "Capital?".into(),
            options: Some(vec!["Dehradun".into()]),
            correct_answer: None,
        };

        assert_eq!(draft.validate().unwrap_err(), QuestionError::MissingAnswer);
    }

    #[test]
    fn question_fails_with_blank_answer() {
        let draft = QuestionDraft::free_text("Capital?", "   ");
        assert_eq!(draft.validate().unwrap_err(), QuestionError::MissingAnswer);
    }

    #[test]
    fn question_fails_if_answer_not_in_options() {
        let draft = QuestionDraft::multiple_choice("Capital?", ["Nainital", "Almora"], "Dehradun");

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, QuestionError::AnswerNotInOptions { ref answer } if answer == "Dehradun"));
    }

    #[test]
    fn question_fails_on_duplicate_option() {
        let draft =
            QuestionDraft::multiple_choice("Capital?", ["Dehradun", "Almora", "Almora"], "Dehradun");

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, QuestionError::DuplicateOption { ref option } if option == "Almora"));
    }

    #[test]
    fn question_fails_with_empty_options_list() {
        let draft = QuestionDraft {
            prompt: "Capital?".into(),
            options: Some(Vec::new()),
            correct_answer: Some("Dehradun".into()),
        };

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, QuestionError::AnswerNotInOptions { ref answer } if answer == "Dehradun"));
    }

    #[test]
    fn free_text_question_has_no_options() {
        let question = QuestionDraft::free_text("Capital?", "Dehradun")
            .validate()
            .unwrap();

        assert!(!question.has_options());
        assert!(question.options().is_empty());
        assert_eq!(question.correct_answer(), "Dehradun");
    }

    #[test]
    fn has_option_matches_exact_candidates() {
        let question = QuestionDraft::multiple_choice("Capital?", ["Dehradun", "Almora"], "Dehradun")
            .validate()
            .unwrap();

        assert!(question.has_option("Almora"));
        assert!(!question.has_option("almora"));
        assert!(!question.has_option("Nainital"));
    }

    #[test]
    fn reordering_options_keeps_answer() {
        let question =
            QuestionDraft::multiple_choice("Capital?", ["Dehradun", "Almora"], "Dehradun")
                .validate()
                .unwrap();

        let reordered = question.with_options(vec!["Almora".into(), "Dehradun".into()]);
        assert_eq!(reordered.correct_answer(), "Dehradun");
        assert_eq!(reordered.options(), ["Almora", "Dehradun"]);
        assert_eq!(reordered.prompt(), question.prompt());
    }
}
