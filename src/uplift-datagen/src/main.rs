//! uplift-datagen: regenerates the sample CSV tables the ranking driver
//! consumes by default.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;
use uplift_model::states::JOURNEY_STATES;

const PERSONAE: &[&str] = &["John Brown", "Jane Doe", "Jack Reacher", "Jack Ryan"];
const ACTIONS: &[&str] = &["ad1", "ad2", "email1", "email2", "call1", "call2"];

#[derive(Parser, Debug)]
#[command(name = "uplift-datagen")]
#[command(about = "Generates sample data files for the intervention ranker")]
#[command(version)]
struct Cli {
    /// Output directory for the generated CSV files
    #[arg(long, default_value = "sampledata")]
    out_dir: PathBuf,

    /// Number of candidate interventions to draw
    #[arg(long, default_value_t = 10)]
    candidates: usize,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uplift_datagen=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("cannot create {}", cli.out_dir.display()))?;

    let states: Vec<&str> = JOURNEY_STATES.iter().map(|(name, _)| *name).collect();

    write_journeys(&cli.out_dir, &states, &mut rng)?;
    write_transitions(&cli.out_dir, &states, &mut rng)?;
    write_personae(&cli.out_dir, &mut rng)?;
    write_action_costs(&cli.out_dir, &mut rng)?;
    write_candidates(&cli.out_dir, &states, cli.candidates, &mut rng)?;

    info!(dir = %cli.out_dir.display(), "Sample data written");
    Ok(())
}

fn create(dir: &Path, name: &str) -> Result<BufWriter<File>> {
    let path = dir.join(name);
    let file =
        File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_journeys(dir: &Path, states: &[&str], rng: &mut StdRng) -> Result<()> {
    let mut out = create(dir, "journeydata.csv")?;
    for state in states {
        for persona in PERSONAE {
            let count: u32 = rng.gen_range(100..10_000);
            writeln!(out, "{state},{persona},{count}")?;
        }
    }
    Ok(())
}

/// One probability vector per (persona, source state, action), normalised
/// to sum to 1 across all target states.
fn write_transitions(dir: &Path, states: &[&str], rng: &mut StdRng) -> Result<()> {
    let mut out = create(dir, "transitions.csv")?;
    for persona in PERSONAE {
        for source in states {
            for action in ACTIONS {
                let mut mass: Vec<f64> = (0..states.len()).map(|_| rng.gen()).collect();
                let total: f64 = mass.iter().sum();
                for m in &mut mass {
                    *m /= total;
                }
                for (target, probability) in states.iter().zip(&mass) {
                    writeln!(out, "{persona},{action},{source},{target},{probability}")?;
                }
            }
        }
    }
    Ok(())
}

fn write_personae(dir: &Path, rng: &mut StdRng) -> Result<()> {
    let mut out = create(dir, "personae.csv")?;
    for persona in PERSONAE {
        let weight: f64 = rng.gen();
        writeln!(out, "{persona},{weight}")?;
    }
    Ok(())
}

/// Random costs normalised to sum to 1 across all actions.
fn write_action_costs(dir: &Path, rng: &mut StdRng) -> Result<()> {
    let mut out = create(dir, "actioncosts.csv")?;
    let costs: Vec<f64> = (0..ACTIONS.len()).map(|_| rng.gen()).collect();
    let total: f64 = costs.iter().sum();
    for (action, cost) in ACTIONS.iter().zip(&costs) {
        writeln!(out, "{action},{}", cost / total)?;
    }
    Ok(())
}

/// Draws `count` distinct (persona, state, action) triples.
fn write_candidates(dir: &Path, states: &[&str], count: usize, rng: &mut StdRng) -> Result<()> {
    let mut out = create(dir, "candidates.csv")?;
    let mut all: Vec<(&str, &str, &str)> = Vec::new();
    for &persona in PERSONAE {
        for &state in states {
            for &action in ACTIONS {
                all.push((persona, state, action));
            }
        }
    }
    all.shuffle(rng);
    for (persona, state, action) in all.into_iter().take(count) {
        writeln!(out, "{persona},{state},{action}")?;
    }
    Ok(())
}
