//! Human-readable ranking report.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uplift_core::types::ScoredIntervention;
use uuid::Uuid;

/// Outcome of one ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub candidates_scored: usize,
    pub top_k: usize,
    /// Top-K interventions, best first.
    pub entries: Vec<ScoredIntervention>,
}

impl RankingReport {
    pub fn new(candidates_scored: usize, top_k: usize, entries: Vec<ScoredIntervention>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            candidates_scored,
            top_k,
            entries,
        }
    }

    /// Writes the ranked listing to `out`.
    pub fn render(&self, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "Top-{} interventions", self.top_k)?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. Persona: {}, State: {}, Action: {}, Score: {:.4}",
                index + 1,
                entry.persona,
                entry.state,
                entry.action,
                entry.score
            )?;
        }
        Ok(())
    }
}
