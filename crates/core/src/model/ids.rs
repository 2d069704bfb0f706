use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a Question
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Identifier for a Choice, unique within its owning Question
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceId(u64);

impl ChoiceId {
    /// Creates a new `ChoiceId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Debug for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoiceId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(QuestionId::new)
            .map_err(|_| ParseIdError {
                kind: "QuestionId".to_string(),
            })
    }
}

impl FromStr for ChoiceId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(ChoiceId::new)
            .map_err(|_| ParseIdError {
                kind: "ChoiceId".to_string(),
            })
    }
}

// ─── Id Generation ─────────────────────────────────────────────────────────────

/// Issues unique `QuestionId`s.
///
/// Ids come from an atomic counter, so one source never issues the same id
/// twice even under concurrent construction. A fresh source starts issuing
/// at 1. `Question::new` draws from a process-wide source; tests and
/// embedders can construct independent sources and pass them through
/// `Question::new_with_source`.
#[derive(Debug, Default)]
pub struct QuestionIdSource(AtomicU64);

impl QuestionIdSource {
    /// Creates a fresh source whose first issued id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Issues the next id. Monotonic per source.
    pub fn next_id(&self) -> QuestionId {
        QuestionId(self.0.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

static PROCESS_SOURCE: QuestionIdSource = QuestionIdSource::new();

/// Returns the process-wide id source backing `Question::new`.
#[must_use]
pub fn process_id_source() -> &'static QuestionIdSource {
    &PROCESS_SOURCE
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_display() {
        let id = QuestionId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_question_id_from_str() {
        let id: QuestionId = "123".parse().unwrap();
        assert_eq!(id, QuestionId::new(123));
    }

    #[test]
    fn test_question_id_from_str_invalid() {
        let result = "not-a-number".parse::<QuestionId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_choice_id_display() {
        let id = ChoiceId::new(99);
        assert_eq!(id.to_string(), "99");
    }

    #[test]
    fn test_choice_id_from_str() {
        let id: ChoiceId = "456".parse().unwrap();
        assert_eq!(id, ChoiceId::new(456));
    }

    #[test]
    fn test_id_roundtrip() {
        let original = ChoiceId::new(42);
        let serialized = original.to_string();
        let deserialized: ChoiceId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn fresh_source_starts_at_one() {
        let source = QuestionIdSource::new();
        assert_eq!(source.next_id(), QuestionId::new(1));
        assert_eq!(source.next_id(), QuestionId::new(2));
    }

    #[test]
    fn source_ids_are_strictly_increasing() {
        let source = QuestionIdSource::new();
        let mut last = source.next_id();
        for _ in 0..100 {
            let next = source.next_id();
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn concurrent_issuance_never_duplicates() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let source = Arc::new(QuestionIdSource::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || (0..250).map(|_| source.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
