use thiserror::Error;

use crate::model::ChoiceError;
use crate::model::QuestionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Choice(#[from] ChoiceError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}
