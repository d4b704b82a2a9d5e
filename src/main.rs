use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_harvest::io::{default_output_path, read_problem, save_schedule};
use u_harvest::scheduler::{solve, Policy, ScheduleKpi, SchedulerConfig, TimeAccounting};
use u_harvest::validation::validate_problem;
use u_harvest::HarvestError;

#[derive(Parser, Debug)]
#[command(name = "u-harvest", version, about = "Deadline-bounded harvest scheduler")]
struct Cli {
    /// Problem file.
    input: PathBuf,
    /// Scheduling strategy.
    #[arg(long, value_enum, default_value_t = Policy::Reranking)]
    policy: Policy,
    /// Charge shipping time as well as setup latency (re-ranking only).
    #[arg(long)]
    charge_harvest: bool,
    /// Output path. Defaults to `<input>.solution.txt`.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Validate the problem and exit without scheduling.
    #[arg(long)]
    validate_only: bool,
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SchedulerConfig {
        let accounting = if self.charge_harvest {
            TimeAccounting::SetupAndHarvest
        } else {
            TimeAccounting::SetupOnly
        };
        SchedulerConfig::new()
            .with_policy(self.policy)
            .with_time_accounting(accounting)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.input.is_file() {
        bail!(
            "input does not exist or is not a regular file: {}",
            cli.input.display()
        );
    }

    tracing::info!(input = %cli.input.display(), "reading problem");
    let problem = read_problem(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    validate_problem(&problem).map_err(HarvestError::Invalid)?;
    if cli.validate_only {
        tracing::info!(
            items = problem.item_count(),
            sources = problem.source_count(),
            "problem is valid"
        );
        return Ok(());
    }

    let schedule = solve(&problem, &cli.config())?;
    let kpi = ScheduleKpi::calculate(&problem, &schedule)?;
    tracing::info!(
        score = kpi.score,
        activations = kpi.activations,
        shipped = kpi.shipped_items,
        duplicate_claims = kpi.duplicate_claims,
        capture = %format!("{:.2}%", kpi.value_capture * 100.0),
        "schedule scored"
    );

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    save_schedule(&schedule, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(output = %output.display(), "schedule written");

    Ok(())
}
