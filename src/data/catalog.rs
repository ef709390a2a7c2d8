use std::collections::HashSet;

use crate::models::Question;

use super::loader::LoadError;

/// Immutable, ordered, non-empty list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    title: String,
    questions: Vec<Question>,
}

impl Catalog {
    /// Validate and wrap a question list.
    ///
    /// Rejects an empty list, duplicate ids and correct indices that point
    /// past the options.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(LoadError::DuplicateId(question.id));
            }
            if question.correct_option_index >= question.option_count() {
                return Err(LoadError::CorrectIndexOutOfRange {
                    id: question.id,
                    index: question.correct_option_index,
                    options: question.option_count(),
                });
            }
        }

        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    /// Question at `index`, clamped into range.
    pub fn question_clamped(&self, index: usize) -> &Question {
        &self.questions[index.min(self.last_index())]
    }
}
