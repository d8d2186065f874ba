//! Scoring core for customer-journey intervention ranking: tabular
//! ingestion, transition aggregation, and the expected-value model.

pub mod costs;
pub mod personas;
pub mod population;
pub mod scoring;
pub mod states;
pub mod tabular;
pub mod transitions;

pub use costs::ActionCostTable;
pub use personas::PersonaWeightTable;
pub use population::PopulationTable;
pub use scoring::ScoringModel;
pub use states::{StateClass, StateClassifier};
pub use transitions::TransitionTable;
