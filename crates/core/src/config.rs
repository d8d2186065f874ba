use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `UPLIFT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Paths to the five input tables.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_personae_path")]
    pub personae_path: String,
    #[serde(default = "default_journeys_path")]
    pub journeys_path: String,
    #[serde(default = "default_transitions_path")]
    pub transitions_path: String,
    #[serde(default = "default_action_costs_path")]
    pub action_costs_path: String,
    #[serde(default = "default_candidates_path")]
    pub candidates_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

// Default functions
fn default_personae_path() -> String {
    "sampledata/personae.csv".to_string()
}
fn default_journeys_path() -> String {
    "sampledata/journeydata.csv".to_string()
}
fn default_transitions_path() -> String {
    "sampledata/transitions.csv".to_string()
}
fn default_action_costs_path() -> String {
    "sampledata/actioncosts.csv".to_string()
}
fn default_candidates_path() -> String {
    "sampledata/candidates.csv".to_string()
}
fn default_top_k() -> usize {
    5
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            personae_path: default_personae_path(),
            journeys_path: default_journeys_path(),
            transitions_path: default_transitions_path(),
            action_costs_path: default_action_costs_path(),
            candidates_path: default_candidates_path(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("UPLIFT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_sampledata() {
        let config = AppConfig::default();
        assert_eq!(config.data.personae_path, "sampledata/personae.csv");
        assert_eq!(config.data.journeys_path, "sampledata/journeydata.csv");
        assert_eq!(config.data.transitions_path, "sampledata/transitions.csv");
        assert_eq!(config.data.action_costs_path, "sampledata/actioncosts.csv");
        assert_eq!(config.data.candidates_path, "sampledata/candidates.csv");
        assert_eq!(config.ranking.top_k, 5);
    }
}
