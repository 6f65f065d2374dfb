use super::AnswerSelection;
use ferrous_authority_domain::root_hints;
use tracing::debug;

/// Builds the priming response: root NS records as answers, their
/// addresses as additionals.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetRootHintsUseCase;

impl GetRootHintsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> AnswerSelection {
        let hints = root_hints();
        debug!(
            servers = hints.ns_records().len(),
            "Serving root hints priming response"
        );

        AnswerSelection {
            answers: hints.ns_records().to_vec(),
            additionals: hints.a_records().to_vec(),
            authority: Vec::new(),
            wildcard_expanded: false,
        }
    }
}
