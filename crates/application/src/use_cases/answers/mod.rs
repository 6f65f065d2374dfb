mod get_root_hints;
mod select_answers;

pub use get_root_hints::GetRootHintsUseCase;
pub use select_answers::{AnswerSelection, SelectAnswersUseCase};
