use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::choice::{Choice, ChoiceError};
use crate::model::ids::{ChoiceId, QuestionId, QuestionIdSource, process_id_source};

/// Maximum question title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// First id a question assigns to its choices.
const CHOICE_ID_BASE: u64 = 1;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("question title cannot exceed 200 characters (got {len})")]
    TitleTooLong { len: usize },

    #[error(transparent)]
    Choice(#[from] ChoiceError),

    #[error("no choice with id {id}")]
    ChoiceNotFound { id: ChoiceId },

    #[error("selected {selected} choices but at most {max} may be selected")]
    TooManySelections { selected: usize, max: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A quiz prompt owning an ordered collection of choices.
///
/// Choice ids are assigned from an instance-owned counter starting at 1 and
/// advancing by one per successful `add_choice`; removals never free an id
/// for reuse. A `Question` is not safe for unsynchronized mutation from
/// multiple threads; callers serialize access per instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: i32,
    max_selections: usize,
    choices: Vec<Choice>,
    next_choice_id: u64,
}

impl Question {
    /// Creates a Question worth 1 point allowing a single selection,
    /// with an id from the process-wide source.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTitle` or `QuestionError::TitleTooLong`
    /// if the title length is outside 1..=[`MAX_TITLE_LEN`] characters.
    pub fn new(title: impl Into<String>) -> Result<Self, QuestionError> {
        Self::with_settings(title, 1, 1)
    }

    /// Creates a Question with explicit points and selection limit,
    /// with an id from the process-wide source.
    ///
    /// `points` carries no constraint beyond being a plain integer.
    ///
    /// # Errors
    ///
    /// Same as [`Question::new`].
    pub fn with_settings(
        title: impl Into<String>,
        points: i32,
        max_selections: usize,
    ) -> Result<Self, QuestionError> {
        Self::new_with_source(process_id_source(), title, points, max_selections)
    }

    /// Creates a Question drawing its id from the given source.
    ///
    /// # Errors
    ///
    /// Same as [`Question::new`].
    pub fn new_with_source(
        source: &QuestionIdSource,
        title: impl Into<String>,
        points: i32,
        max_selections: usize,
    ) -> Result<Self, QuestionError> {
        let title = title.into();
        let len = title.chars().count();
        if len == 0 {
            return Err(QuestionError::EmptyTitle);
        }
        if len > MAX_TITLE_LEN {
            return Err(QuestionError::TitleTooLong { len });
        }

        Ok(Self {
            id: source.next_id(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
            next_choice_id: CHOICE_ID_BASE,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }

    #[must_use]
    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// The choices in insertion order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Looks up a choice by id.
    #[must_use]
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == id)
    }

    // ─── Choice Management ─────────────────────────────────────────────────────

    /// Appends a new choice and returns a reference to it.
    ///
    /// The choice receives the next id from this question's counter; the
    /// counter advances only when validation succeeds, so consecutive
    /// successful adds yield ids exactly one apart.
    ///
    /// # Errors
    ///
    /// Propagates `ChoiceError` for empty or over-length text, leaving the
    /// question unchanged.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, QuestionError> {
        let choice = Choice::new(ChoiceId::new(self.next_choice_id), text, is_correct)?;
        self.next_choice_id += 1;
        let index = self.choices.len();
        self.choices.push(choice);
        Ok(&self.choices[index])
    }

    /// Removes the choice with the given id, preserving the order of the
    /// remaining choices.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::ChoiceNotFound` if no choice has that id;
    /// the collection is untouched on failure.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<(), QuestionError> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id() == id)
            .ok_or(QuestionError::ChoiceNotFound { id })?;
        self.choices.remove(index);
        Ok(())
    }

    /// Removes every choice. Idempotent.
    pub fn remove_all_choices(&mut self) {
        self.choices.clear();
    }

    /// Marks exactly the given ids as correct and every other choice as
    /// incorrect.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::ChoiceNotFound` if any id does not belong to
    /// a current choice. All ids are validated before any flag changes, so
    /// a failure leaves every flag as it was.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) -> Result<(), QuestionError> {
        for &id in ids {
            if self.choice(id).is_none() {
                return Err(QuestionError::ChoiceNotFound { id });
            }
        }
        for choice in &mut self.choices {
            let mark = ids.contains(&choice.id());
            choice.set_correct(mark);
        }
        Ok(())
    }

    /// Returns the ids among `selected_ids` whose choice is marked correct,
    /// preserving the relative order of `selected_ids`.
    ///
    /// Ids that do not belong to any current choice are silently treated as
    /// not correct rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooManySelections` if `selected_ids` holds
    /// more ids than `max_selections` allows.
    pub fn correct_selected_choices(
        &self,
        selected_ids: &[ChoiceId],
    ) -> Result<Vec<ChoiceId>, QuestionError> {
        if selected_ids.len() > self.max_selections {
            return Err(QuestionError::TooManySelections {
                selected: selected_ids.len(),
                max: self.max_selections,
            });
        }

        Ok(selected_ids
            .iter()
            .copied()
            .filter(|&id| self.choice(id).is_some_and(Choice::is_correct))
            .collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
