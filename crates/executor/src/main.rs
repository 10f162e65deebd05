pub mod config;
pub mod csv_loader;
pub mod error;
pub mod runner;
pub mod simulator;
pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use csv_loader::CsvLoader;
use error::Error;
use mcm_core::GraphCSR;
use runner::{Runner, max_disagreement, parse_selection};
use simulator::GraphSimulator;
use types::{DataSource, GraphSource, SolveReport};

#[derive(Parser)]
#[command(name = "mcm")]
#[command(about = "Minimum mean cycle of a strongly connected weighted digraph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Solver to run: karp, burns, lawler, howard or all
    #[arg(long, global = true)]
    algorithm: Option<String>,

    /// Upper bound on the answer used as a warm start
    #[arg(long, global = true, allow_negative_numbers = true)]
    hint: Option<f64>,

    /// Configuration file (default: crates/executor/Config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an edge list read from a CSV file with a from,to,weight header
    Csv { path: PathBuf },
    /// Solve a randomly generated ring-with-chords graph
    Sim {
        /// Overrides simulator.seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {}", e);
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "mcm failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every solver succeeded and the answers agree.
fn run(cli: Cli) -> Result<bool, Error> {
    let mut config = config::load_config(cli.config.as_deref())?;

    let source = match cli.command {
        Commands::Sim { seed } => {
            if seed.is_some() {
                config.simulator.seed = seed;
            }
            DataSource::Sim
        }
        Commands::Csv { path } => DataSource::Csv(path),
    };

    let algorithm = cli.algorithm.unwrap_or(config.runner.algorithm.clone());
    let algorithms = parse_selection(&algorithm)?;
    let hint = cli.hint.or(config.runner.lambda_hint);

    let graph = load_graph(&source, &config)?;
    info!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "graph ready"
    );

    let runner = Runner::new(config.solver, config.runner.plus_infinity, hint);
    let reports = runner.run(&graph, &algorithms);
    print_reports(&reports);

    let mut ok = reports.iter().all(|report| report.outcome.is_ok());
    if algorithms.len() > 1 {
        if let Some(spread) = max_disagreement(&reports) {
            println!("max disagreement: {:.3e}", spread);
            if spread > config.runner.agreement_tolerance {
                error!(
                    spread,
                    tolerance = config.runner.agreement_tolerance,
                    "solvers disagree"
                );
                ok = false;
            }
        }
    }

    Ok(ok)
}

fn load_graph(source: &DataSource, config: &config::Config) -> Result<GraphCSR, Error> {
    match source {
        DataSource::Sim => {
            info!("Loading graph from simulator...");
            GraphSimulator::new(config.simulator.clone())?.load_graph()
        }
        DataSource::Csv(path) => {
            info!("Loading graph from CSV...");
            CsvLoader::new(path.clone()).load_graph()
        }
    }
}

fn print_reports(reports: &[SolveReport]) {
    for report in reports {
        match &report.outcome {
            Ok(result) => println!(
                "{:<8} lambda = {:>14.6}  iterations = {:>6}  time = {:?}",
                report.algorithm, result.lambda, result.iterations, report.elapsed
            ),
            Err(e) => println!("{:<8} error: {}", report.algorithm, e),
        }
    }
}
