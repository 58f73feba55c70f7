use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Text must not be empty.")]
    Empty,
}

/// Non-empty, trimmed text tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<T>(String, std::marker::PhantomData<T>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer;

pub type PromptText = Text<Prompt>;
pub type AnswerText = Text<Answer>;

impl<T> Text<T> {
    /// Trims surrounding whitespace and rejects what is left if empty.
    pub fn parse(s: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned(), std::marker::PhantomData))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
