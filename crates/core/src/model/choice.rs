use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::ChoiceId;

/// Maximum choice text length, in characters.
pub const MAX_TEXT_LEN: usize = 100;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChoiceError {
    #[error("choice text cannot be empty")]
    EmptyText,

    #[error("choice text cannot exceed 100 characters (got {len})")]
    TextTooLong { len: usize },
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// One answer option belonging to a Question.
///
/// Ids are assigned by the owning `Question`, never by the choice itself,
/// and the correctness flag is mutated only through `Question`'s
/// choice-management operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Creates a new Choice.
    ///
    /// Text length is counted in characters, not bytes, and is not trimmed:
    /// whitespace-only text of valid length is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ChoiceError::EmptyText` if the text is empty, or
    /// `ChoiceError::TextTooLong` if it exceeds [`MAX_TEXT_LEN`] characters.
    pub fn new(
        id: ChoiceId,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<Self, ChoiceError> {
        let text = text.into();
        let len = text.chars().count();
        if len == 0 {
            return Err(ChoiceError::EmptyText);
        }
        if len > MAX_TEXT_LEN {
            return Err(ChoiceError::TextTooLong { len });
        }

        Ok(Self {
            id,
            text,
            is_correct,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_new_happy_path() {
        let choice = Choice::new(ChoiceId::new(1), "Brasília", true).unwrap();
        assert_eq!(choice.id(), ChoiceId::new(1));
        assert_eq!(choice.text(), "Brasília");
        assert!(choice.is_correct());
    }

    #[test]
    fn choice_defaults_are_observable() {
        let choice = Choice::new(ChoiceId::new(1), "a", false).unwrap();
        assert!(!choice.is_correct());
    }

    #[test]
    fn choice_rejects_empty_text() {
        let err = Choice::new(ChoiceId::new(1), "", false).unwrap_err();
        assert_eq!(err, ChoiceError::EmptyText);
    }

    #[test]
    fn choice_rejects_text_over_100_chars() {
        let err = Choice::new(ChoiceId::new(1), "a".repeat(101), false).unwrap_err();
        assert_eq!(err, ChoiceError::TextTooLong { len: 101 });
    }

    #[test]
    fn choice_accepts_boundary_lengths() {
        assert!(Choice::new(ChoiceId::new(1), "a", false).is_ok());
        assert!(Choice::new(ChoiceId::new(1), "a".repeat(100), false).is_ok());
    }

    #[test]
    fn choice_length_counts_characters_not_bytes() {
        // 100 two-byte characters: 200 bytes, still within the limit.
        let text = "é".repeat(100);
        assert!(Choice::new(ChoiceId::new(1), text, false).is_ok());
    }

    #[test]
    fn choice_does_not_trim_whitespace() {
        let choice = Choice::new(ChoiceId::new(1), " ", false).unwrap();
        assert_eq!(choice.text(), " ");
    }
}
