mod choice;
mod ids;
mod question;

pub use ids::{ChoiceId, ParseIdError, QuestionId, QuestionIdSource, process_id_source};

pub use choice::{Choice, ChoiceError, MAX_TEXT_LEN};
pub use question::{MAX_TITLE_LEN, Question, QuestionError};
