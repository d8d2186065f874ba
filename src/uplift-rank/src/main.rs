//! uplift-rank: batch ranking driver.
//!
//! Loads the data tables, scores the candidate interventions, and prints
//! the top-K ranking to stdout.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use uplift_core::{AppConfig, UpliftError};
use uplift_model::ScoringModel;
use uplift_ranking::candidates::load_candidates;
use uplift_ranking::Ranker;

#[derive(Parser, Debug)]
#[command(name = "uplift-rank")]
#[command(about = "Ranks candidate customer-journey interventions by expected value")]
#[command(version)]
struct Cli {
    /// Personae file: persona_name,opportunity_cost_weight (overrides config)
    #[arg(long, env = "UPLIFT__DATA__PERSONAE_PATH")]
    personae: Option<String>,

    /// Journey population file: state_name,persona_name,count (overrides config)
    #[arg(long, env = "UPLIFT__DATA__JOURNEYS_PATH")]
    journeys: Option<String>,

    /// Transitions file: persona,action,source_state,target_state,probability (overrides config)
    #[arg(long, env = "UPLIFT__DATA__TRANSITIONS_PATH")]
    transitions: Option<String>,

    /// Action cost file: action_name,amortized_cost_fraction (overrides config)
    #[arg(long, env = "UPLIFT__DATA__ACTION_COSTS_PATH")]
    action_costs: Option<String>,

    /// Candidates file: persona_name,source_state,action_name (overrides config)
    #[arg(long, env = "UPLIFT__DATA__CANDIDATES_PATH")]
    candidates: Option<String>,

    /// How many interventions to report (overrides config)
    #[arg(long, env = "UPLIFT__RANKING__TOP_K")]
    top_k: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uplift_rank=info,uplift_model=info,uplift_ranking=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(path) = cli.personae {
        config.data.personae_path = path;
    }
    if let Some(path) = cli.journeys {
        config.data.journeys_path = path;
    }
    if let Some(path) = cli.transitions {
        config.data.transitions_path = path;
    }
    if let Some(path) = cli.action_costs {
        config.data.action_costs_path = path;
    }
    if let Some(path) = cli.candidates {
        config.data.candidates_path = path;
    }
    if let Some(top_k) = cli.top_k {
        config.ranking.top_k = top_k;
    }

    if config.ranking.top_k == 0 {
        return Err(UpliftError::Config("top_k must be at least 1".into()).into());
    }

    info!(
        personae = %config.data.personae_path,
        journeys = %config.data.journeys_path,
        transitions = %config.data.transitions_path,
        action_costs = %config.data.action_costs_path,
        candidates = %config.data.candidates_path,
        top_k = config.ranking.top_k,
        "Configuration loaded"
    );

    let model = ScoringModel::load(&config.data)?;
    let candidates = load_candidates(&config.data.candidates_path)?;
    info!(count = candidates.len(), "Candidates loaded");

    let ranker = Ranker::new(model, config.ranking.top_k);
    let report = ranker.rank(&candidates);
    info!(run_id = %report.run_id, "Ranking run complete");

    report.render(std::io::stdout().lock())?;
    Ok(())
}
