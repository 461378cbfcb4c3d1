//! Score Assessment use case
//!
//! Invoked synchronously when the answering flow reaches `result`. The
//! flow's structure guarantees a complete response set at that point, so
//! the engine's completeness error is unreachable through this path —
//! it still propagates rather than being swallowed, in case a caller
//! ever scores outside the flow.

use bigfive_domain::{score, Assessment, ScoreSummary, ScoringError};
use tracing::debug;

/// Use case for scoring a finished assessment
pub struct ScoreAssessmentUseCase;

impl ScoreAssessmentUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case
    pub fn execute(&self, assessment: &Assessment) -> Result<ScoreSummary, ScoringError> {
        debug!(
            answered = assessment.answered(),
            total = assessment.total_items(),
            "scoring assessment"
        );
        score(assessment.catalog(), assessment.responses())
    }
}

impl Default for ScoreAssessmentUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigfive_domain::{Catalog, Domain, Rating, RawItem};

    #[test]
    fn test_scores_finished_flow() {
        let raw = |number: u8, reverse: bool| RawItem {
            number,
            text: format!("Statement {number}."),
            domain: "Extraversion".to_string(),
            facet: "Sociability".to_string(),
            reverse,
        };
        let catalog = Catalog::from_raw(vec![raw(1, false), raw(2, true)]).unwrap();
        let mut flow = Assessment::new(catalog);
        flow.start();
        flow.select(Rating::try_new(4).unwrap());
        flow.next();
        flow.select(Rating::try_new(2).unwrap());
        flow.next();

        let summary = ScoreAssessmentUseCase::new().execute(&flow).unwrap();
        assert_eq!(summary.domain_average(Domain::Extraversion), 4.0);
    }

    #[test]
    fn test_incomplete_flow_surfaces_engine_error() {
        let catalog = Catalog::from_raw(vec![RawItem {
            number: 1,
            text: "Statement 1.".to_string(),
            domain: "Extraversion".to_string(),
            facet: "Sociability".to_string(),
            reverse: false,
        }])
        .unwrap();
        let flow = Assessment::new(catalog);

        let err = ScoreAssessmentUseCase::new().execute(&flow).unwrap_err();
        assert_eq!(err, ScoringError::MissingResponse { number: 1 });
    }
}
