use crate::model::ids::ChapterId;
use crate::model::question::Question;

/// A named group of questions presented together as one quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    id: ChapterId,
    questions: Vec<Question>,
}

impl Chapter {
    #[must_use]
    pub fn new(id: impl Into<ChapterId>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Read-only snapshot of the whole question corpus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionBank {
    chapters: Vec<Chapter>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Look up a chapter by exact identifier. The first match wins.
    #[must_use]
    pub fn chapter(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.id() == id)
    }

    /// Chapter identifiers in source order.
    #[must_use]
    pub fn chapter_ids(&self) -> Vec<ChapterId> {
        self.chapters.iter().map(|c| c.id().clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}
