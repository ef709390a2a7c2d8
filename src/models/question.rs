use serde::Deserialize;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: [String; 4],
    #[serde(alias = "correctAnswer", alias = "correctOptionIndex")]
    pub correct_option_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_option_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_option_index]
    }
}

/// One confirmed answer. Appended once per question, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub selected_option_index: usize,
    pub is_correct: bool,
}
