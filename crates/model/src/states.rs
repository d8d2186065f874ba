//! Journey-state catalog and desirability classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Desirability class of a journey state, used to route transition
/// probability mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Desirable,
    Undesirable,
    Neutral,
}

/// Built-in journey-state catalog. "qualified lead" is listed but
/// neutral: transitions into it route no mass either way.
pub const JOURNEY_STATES: &[(&str, StateClass)] = &[
    ("qualified lead", StateClass::Neutral),
    ("aware", StateClass::Desirable),
    ("considering", StateClass::Desirable),
    ("evaluating", StateClass::Desirable),
    ("purchased", StateClass::Desirable),
    ("onboarded", StateClass::Desirable),
    ("engaged", StateClass::Desirable),
    ("to-be-retained", StateClass::Desirable),
    ("advocating", StateClass::Desirable),
    ("annoyed", StateClass::Undesirable),
    ("about-to-leave", StateClass::Undesirable),
    ("exited", StateClass::Undesirable),
];

/// Immutable mapping from state name to desirability class, built once at
/// startup.
#[derive(Debug, Clone)]
pub struct StateClassifier {
    classes: HashMap<String, StateClass>,
}

impl StateClassifier {
    /// Classifier over the built-in journey-state catalog.
    pub fn builtin() -> Self {
        Self::from_pairs(
            JOURNEY_STATES
                .iter()
                .map(|(name, class)| (name.to_string(), *class)),
        )
    }

    /// Classifier over explicit (state, class) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, StateClass)>) -> Self {
        Self {
            classes: pairs.into_iter().collect(),
        }
    }

    /// Classifies a state name. States absent from the catalog are
    /// neutral.
    pub fn classify(&self, state: &str) -> StateClass {
        self.classes
            .get(state)
            .copied()
            .unwrap_or(StateClass::Neutral)
    }
}

impl Default for StateClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
