use clap::Parser;
use mrfo::functions::Ackley;
use mrfo::{MrfoConfig, MrfoRunner};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Manta Ray Foraging Optimization (MRFO).
///
/// MRFO is a bio-inspired metaheuristic that mimics the chain, cyclone,
/// and somersault foraging behaviors of manta rays to balance
/// exploration and exploitation in global optimization. This binary
/// minimizes the Ackley benchmark function over the configured search
/// space.
#[derive(Parser, Debug)]
#[command(author, version, about, verbatim_doc_comment)]
struct Cli {
    /// JSON parameter file; replaces the individual flags
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with_all = [
        "population_size", "dimensions", "max_iterations",
        "search_space_min", "search_space_max",
    ])]
    file: Option<PathBuf>,

    /// The population size
    #[arg(short = 'N', long, required_unless_present = "file")]
    population_size: Option<usize>,

    /// Dimensionality of the search space
    #[arg(short = 'd', long, required_unless_present = "file")]
    dimensions: Option<usize>,

    /// The maximum number of iterations
    #[arg(short = 'T', long, required_unless_present = "file")]
    max_iterations: Option<usize>,

    /// The search space's lower bound
    #[arg(
        short = 'L',
        long,
        required_unless_present = "file",
        allow_hyphen_values = true
    )]
    search_space_min: Option<f64>,

    /// The search space's upper bound
    #[arg(
        short = 'U',
        long,
        required_unless_present = "file",
        allow_hyphen_values = true
    )]
    search_space_max: Option<f64>,

    /// Log each iteration's best solution and fitness
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn build_config(cli: &Cli) -> Result<MrfoConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.file {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let config: MrfoConfig = serde_json::from_str(&contents)
                .map_err(|e| format!("invalid parameter file {}: {e}", path.display()))?;
            config.validate()?;
            config
        }
        // The flags are required_unless_present(file), so they are all
        // Some here.
        None => MrfoConfig::new(
            cli.population_size.unwrap(),
            cli.dimensions.unwrap(),
            cli.max_iterations.unwrap(),
            cli.search_space_min.unwrap(),
            cli.search_space_max.unwrap(),
        )?,
    };

    if cli.verbose {
        config = config.with_log_progress(true);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = build_config(&cli).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });

    let result = MrfoRunner::run(Ackley::default(), &config).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });

    info!("Optimization complete!");
    info!("Best fitness: {:.6e}", result.best_fitness);
    info!("Best solution: {:?}", result.best);
}
