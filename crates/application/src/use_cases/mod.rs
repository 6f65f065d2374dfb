pub mod answers;

pub use answers::{AnswerSelection, GetRootHintsUseCase, SelectAnswersUseCase};
