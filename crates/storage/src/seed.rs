//! Built-in catalog: sake brand names and their readings.

use quiz_core::model::{Question, QuestionId};

const DEFAULT_QUESTIONS: &[(&str, &str)] = &[
    ("晴耕雨讀", "せいこううどく"),
    ("加賀鳶", "かがとび"),
    ("天照", "てんしょう"),
    ("猿川", "さるこう"),
    ("CHILL GREEN", "ちるぐりーん"),
    ("久米島の久米仙", "くめじまのくめせん"),
    ("壱岐", "いき"),
    ("翠", "すい"),
    ("山椒", "さんしょう"),
    ("白雪", "しらゆき"),
    ("上喜元", "じょうきげん"),
    ("〆張鶴", "しめはりつる"),
    ("天狗舞", "てんぐまい"),
    ("鍋島", "なべしま"),
];

/// The seed questions with ids `1..=14`, in catalog order.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    DEFAULT_QUESTIONS
        .iter()
        .zip(1_u64..)
        .filter_map(|(&(prompt, answer), id)| Question::new(QuestionId::new(id), prompt, answer).ok())
        .collect()
}
