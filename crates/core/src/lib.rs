//! In-memory quiz question model.
//!
//! A [`model::Question`] owns an ordered collection of [`model::Choice`]s,
//! validates titles and choice texts on construction, assigns ids, and
//! scores a user's selection against the correctness flags. There is no
//! persistence, networking, or UI here; everything is synchronous and
//! lives in memory for the lifetime of one question.

pub mod error;
pub mod model;

pub use error::Error;
pub use model::{Choice, ChoiceId, Question, QuestionId};
