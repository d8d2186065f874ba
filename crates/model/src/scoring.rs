//! Expected-value scoring for candidate interventions.

use tracing::info;
use uplift_core::config::DataConfig;
use uplift_core::UpliftResult;

use crate::costs::ActionCostTable;
use crate::personas::PersonaWeightTable;
use crate::population::PopulationTable;
use crate::states::StateClassifier;
use crate::transitions::TransitionTable;

/// Composite scoring model over the four data tables.
///
/// Built once from a complete read of the input files; immutable
/// afterwards, so scoring needs no synchronisation.
pub struct ScoringModel {
    transitions: TransitionTable,
    population: PopulationTable,
    action_costs: ActionCostTable,
    persona_weights: PersonaWeightTable,
}

impl ScoringModel {
    pub fn new(
        transitions: TransitionTable,
        population: PopulationTable,
        action_costs: ActionCostTable,
        persona_weights: PersonaWeightTable,
    ) -> Self {
        Self {
            transitions,
            population,
            action_costs,
            persona_weights,
        }
    }

    /// Builds all four tables from the configured input files.
    pub fn load(data: &DataConfig) -> UpliftResult<Self> {
        let classifier = StateClassifier::builtin();
        let transitions = TransitionTable::load(&data.transitions_path, &classifier)?;
        let population = PopulationTable::load(&data.journeys_path)?;
        let action_costs = ActionCostTable::load(&data.action_costs_path)?;
        let persona_weights = PersonaWeightTable::load(&data.personae_path)?;

        info!(
            populations = population.len(),
            actions = action_costs.len(),
            personae = persona_weights.len(),
            "scoring model loaded"
        );

        Ok(Self::new(
            transitions,
            population,
            action_costs,
            persona_weights,
        ))
    }

    /// Expected-value score for applying `action` to `persona` users
    /// currently in `state`.
    ///
    /// Pure function of the table state and its inputs. Unknown personae,
    /// actions, states, or transition triples contribute zero effect
    /// through the table defaults.
    ///
    /// Panics if an aggregated transition mass falls outside [0, 1]: the
    /// transition input was not a probability distribution and no
    /// meaningful ranking can come out of it.
    pub fn score(&self, persona: &str, action: &str, state: &str) -> f64 {
        let (p_good, p_bad) = self.transitions.lookup(persona, action, state);
        assert!(
            (0.0..=1.0).contains(&p_good),
            "good-transition mass {p_good} out of range for {persona}/{action}/{state}"
        );
        assert!(
            (0.0..=1.0).contains(&p_bad),
            "bad-transition mass {p_bad} out of range for {persona}/{action}/{state}"
        );

        let raw_benefit = p_good - p_bad;
        let amortized_cost = self.action_costs.lookup(action);
        let opportunity_cost = self.persona_weights.lookup(persona);
        let n_users = self.population.lookup(state, persona);

        n_users as f64 * (raw_benefit + (1.0 - p_bad) * opportunity_cost) / amortized_cost.exp()
    }
}
