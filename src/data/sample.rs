//! Built-in KonnichiWow practice set.

use crate::models::Question;

use super::Catalog;

pub const SAMPLE_TITLE: &str = "KonnichiWow Japanese Language Practice Quiz";

fn question(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct_option_index: usize,
    explanation: &str,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.map(str::to_string),
        correct_option_index,
        explanation: explanation.to_string(),
    }
}

fn sample_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "What does 'こんにちは' (Konnichiwa) mean?",
            ["Good morning", "Hello/Good afternoon", "Good night", "Goodbye"],
            1,
            "'こんにちは' (Konnichiwa) is a common Japanese greeting used during the daytime, meaning 'Hello' or 'Good afternoon'.",
        ),
        question(
            2,
            "Which hiragana character represents the sound 'ka'?",
            ["き", "か", "く", "け"],
            1,
            "The hiragana character 'か' represents the sound 'ka'. き=ki, く=ku, け=ke.",
        ),
        question(
            3,
            "How do you say 'Thank you' in Japanese?",
            ["Sumimasen", "Gomenasai", "Arigatou", "Sayonara"],
            2,
            "'ありがとう' (Arigatou) means 'Thank you' in Japanese. Sumimasen=Excuse me, Gomenasai=I'm sorry, Sayonara=Goodbye.",
        ),
        question(
            4,
            "What is the Japanese word for 'cat'?",
            ["Inu", "Tori", "Neko", "Sakana"],
            2,
            "'ねこ' (Neko) means 'cat'. Inu=dog, Tori=bird, Sakana=fish.",
        ),
        question(
            5,
            "Which number does 'san' (三) represent?",
            ["One", "Two", "Three", "Four"],
            2,
            "'三' (San) is the Japanese number three. 一=ichi (one), 二=ni (two), 四=shi/yon (four).",
        ),
    ]
}

impl Catalog {
    /// The five-question practice set shipped with the binary.
    pub fn sample() -> Self {
        // Hand-checked data; `new` cannot reject it.
        match Catalog::new(SAMPLE_TITLE, sample_questions()) {
            Ok(catalog) => catalog,
            Err(err) => unreachable!("built-in catalog is invalid: {}", err),
        }
    }
}
