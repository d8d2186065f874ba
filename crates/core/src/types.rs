use serde::{Deserialize, Serialize};

/// A proposed (persona, state, action) triple awaiting evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIntervention {
    pub persona: String,
    pub state: String,
    pub action: String,
}

/// A candidate intervention together with its expected-value score.
///
/// The score's sign and magnitude are meaningful only relative to other
/// candidates scored against the same tables; it is not an absolute
/// utility unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredIntervention {
    pub persona: String,
    pub state: String,
    pub action: String,
    pub score: f64,
}
