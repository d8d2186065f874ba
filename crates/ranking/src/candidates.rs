//! Candidate-list ingestion.

use std::path::Path;

use uplift_core::types::CandidateIntervention;
use uplift_core::UpliftResult;
use uplift_model::tabular;

/// Reads candidate (persona, state, action) triples in file order.
pub fn load_candidates(path: impl AsRef<Path>) -> UpliftResult<Vec<CandidateIntervention>> {
    let mut candidates = Vec::new();
    for record in tabular::records(path)? {
        let record = record?;
        candidates.push(CandidateIntervention {
            persona: record.field(0)?.to_string(),
            state: record.field(1)?.to_string(),
            action: record.field(2)?.to_string(),
        });
    }
    Ok(candidates)
}
