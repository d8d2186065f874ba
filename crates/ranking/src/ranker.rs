//! Scores candidate interventions and selects the top-K.

use std::cmp::Ordering;

use tracing::info;
use uplift_core::types::{CandidateIntervention, ScoredIntervention};
use uplift_model::ScoringModel;

use crate::report::RankingReport;

/// Ranks candidate interventions against a scoring model.
pub struct Ranker {
    model: ScoringModel,
    top_k: usize,
}

impl Ranker {
    pub fn new(model: ScoringModel, top_k: usize) -> Self {
        Self { model, top_k }
    }

    /// Scores every candidate and returns the top-K report.
    ///
    /// The sort is descending by score and stable: candidates with equal
    /// scores keep their input order.
    pub fn rank(&self, candidates: &[CandidateIntervention]) -> RankingReport {
        let mut scored: Vec<ScoredIntervention> = candidates
            .iter()
            .map(|candidate| ScoredIntervention {
                persona: candidate.persona.clone(),
                state: candidate.state.clone(),
                action: candidate.action.clone(),
                score: self
                    .model
                    .score(&candidate.persona, &candidate.action, &candidate.state),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.top_k);

        info!(
            candidates = candidates.len(),
            reported = scored.len(),
            "ranking complete"
        );
        RankingReport::new(candidates.len(), self.top_k, scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_model::tabular::Record;
    use uplift_model::{
        ActionCostTable, PersonaWeightTable, PopulationTable, StateClassifier, TransitionTable,
    };
    use uplift_core::UpliftResult;

    fn rows(fields: &[&[&str]]) -> Vec<UpliftResult<Record>> {
        fields.iter().map(|f| Ok(Record::from_fields(f))).collect()
    }

    fn candidate(persona: &str, state: &str, action: &str) -> CandidateIntervention {
        CandidateIntervention {
            persona: persona.to_string(),
            state: state.to_string(),
            action: action.to_string(),
        }
    }

    /// Two personas in "aware"; email moves Jane up with certainty and
    /// John only half the time, so Jane should outrank John.
    fn test_model() -> ScoringModel {
        let classifier = StateClassifier::builtin();
        let transitions = TransitionTable::build(
            rows(&[
                &["Jane Doe", "email1", "aware", "purchased", "0.8"],
                &["Jane Doe", "email1", "aware", "exited", "0.1"],
                &["John Brown", "email1", "aware", "purchased", "0.4"],
                &["John Brown", "email1", "aware", "exited", "0.1"],
            ]),
            &classifier,
        )
        .unwrap();
        let population = PopulationTable::build(rows(&[
            &["aware", "Jane Doe", "100"],
            &["aware", "John Brown", "100"],
        ]))
        .unwrap();
        let action_costs = ActionCostTable::build(rows(&[&["email1", "0.2"]])).unwrap();
        let persona_weights = PersonaWeightTable::build(rows(&[
            &["Jane Doe", "0.5"],
            &["John Brown", "0.5"],
        ]))
        .unwrap();
        ScoringModel::new(transitions, population, action_costs, persona_weights)
    }

    #[test]
    fn test_rank_orders_by_descending_score() {
        let ranker = Ranker::new(test_model(), 5);
        let report = ranker.rank(&[
            candidate("John Brown", "aware", "email1"),
            candidate("Jane Doe", "aware", "email1"),
        ]);

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].persona, "Jane Doe");
        assert_eq!(report.entries[1].persona, "John Brown");
        assert!(report.entries[0].score > report.entries[1].score);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        // Neither candidate is known to any table, so both score 0.0.
        let ranker = Ranker::new(test_model(), 5);
        let report = ranker.rank(&[
            candidate("Nemo", "aware", "fax"),
            candidate("Dory", "aware", "fax"),
        ]);

        assert_eq!(report.entries[0].score, 0.0);
        assert_eq!(report.entries[1].score, 0.0);
        assert_eq!(report.entries[0].persona, "Nemo");
        assert_eq!(report.entries[1].persona, "Dory");
    }

    #[test]
    fn test_top_k_truncates() {
        let ranker = Ranker::new(test_model(), 1);
        let report = ranker.rank(&[
            candidate("John Brown", "aware", "email1"),
            candidate("Jane Doe", "aware", "email1"),
        ]);

        assert_eq!(report.candidates_scored, 2);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].persona, "Jane Doe");
    }
}
