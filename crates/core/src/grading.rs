use std::fmt;

use crate::model::Question;

//
// ─── FEEDBACK ─────────────────────────────────────────────────────────────────
//

/// Result of evaluating one answer against a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    /// Carries the canonical answer so it can be revealed.
    Incorrect { correct_answer: String },
}

impl Feedback {
    fn incorrect(question: &Question) -> Self {
        Self::Incorrect {
            correct_answer: question.correct_answer().to_owned(),
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }

    /// The canonical answer revealed by an incorrect result.
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&str> {
        match self {
            Feedback::Correct => None,
            Feedback::Incorrect { correct_answer } => Some(correct_answer),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => f.write_str("Correct!"),
            Feedback::Incorrect { correct_answer } => {
                write!(f, "Wrong! The correct answer is: {correct_answer}")
            }
        }
    }
}

//
// ─── GRADING ──────────────────────────────────────────────────────────────────
//

/// Trim surrounding whitespace and case-fold.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Multiple-choice evaluation: exact string equality with the canonical answer.
#[must_use]
pub fn grade_choice(question: &Question, option: &str) -> Feedback {
    if option == question.correct_answer() {
        Feedback::Correct
    } else {
        Feedback::incorrect(question)
    }
}

/// Free-text evaluation: the normalized canonical answer must be contained in
/// the normalized user text. Blank input never matches.
#[must_use]
pub fn grade_free_text(question: &Question, text: &str) -> Feedback {
    let given = normalize_answer(text);
    let expected = normalize_answer(question.correct_answer());

    if !given.is_empty() && !expected.is_empty() && given.contains(&expected) {
        Feedback::Correct
    } else {
        Feedback::incorrect(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn capital() -> Question {
        QuestionDraft::multiple_choice(
            "What is the capital of Uttarakhand?",
            ["Dehradun", "Nainital", "Almora"],
            "Dehradun",
        )
        .validate()
        .unwrap()
    }

    #[test]
    fn choice_requires_exact_match() {
        let q = capital();
        assert_eq!(grade_choice(&q, "Dehradun"), Feedback::Correct);
        assert_eq!(
            grade_choice(&q, "dehradun"),
            Feedback::Incorrect {
                correct_answer: "Dehradun".into()
            }
        );
        assert_eq!(
            grade_choice(&q, "Nainital").revealed_answer(),
            Some("Dehradun")
        );
    }

    #[test]
    fn free_text_ignores_case_and_padding() {
        let q = capital();
        assert!(grade_free_text(&q, "  dehradun  ").is_correct());
        assert!(grade_free_text(&q, "DEHRADUN").is_correct());
    }

    #[test]
    fn free_text_accepts_containment() {
        let q = capital();
        assert!(grade_free_text(&q, "The capital is Dehradun city").is_correct());
    }

    #[test]
    fn free_text_rejects_other_answers() {
        let q = capital();
        assert_eq!(
            grade_free_text(&q, "Nainital"),
            Feedback::Incorrect {
                correct_answer: "Dehradun".into()
            }
        );
        assert!(!grade_free_text(&q, "Dehra").is_correct());
    }

    #[test]
    fn blank_free_text_is_incorrect() {
        let q = capital();
        assert!(!grade_free_text(&q, "").is_correct());
        assert!(!grade_free_text(&q, "   \n\t").is_correct());
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(Feedback::Correct.to_string(), "Correct!");
        assert_eq!(
            grade_choice(&capital(), "Almora").to_string(),
            "Wrong! The correct answer is: Dehradun"
        );
    }
}
