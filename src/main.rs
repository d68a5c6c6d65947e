use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use protein_network_analyzer::data::loader;
use protein_network_analyzer::{server, storage, viz, Config, NetworkAnalyzer};

#[derive(Parser, Debug)]
#[clap(
    name = "protein-network",
    about = "Structural analysis of protein interaction networks"
)]
struct Cli {
    /// Path to a JSON dataset (defaults to the embedded seed corpus)
    #[clap(long, global = true)]
    dataset: Option<PathBuf>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0", global = true)]
    threads: usize,

    /// Verbose logging
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[clap(long, default_value = "0.0.0.0:8000")]
        bind: String,
    },

    /// Print the network with summary statistics
    Network,

    /// Rank proteins by degree, betweenness, closeness or clustering
    Centrality {
        metric: String,
    },

    /// Detect communities by greedy modularity maximization
    Communities,

    /// Predict missing interactions
    Predict {
        /// Minimum score for a prediction
        #[clap(long, default_value = "0.2")]
        threshold: f64,

        /// Maximum number of predictions to report
        #[clap(long, default_value = "20")]
        top: usize,
    },

    /// Show details for one protein
    Protein {
        name: String,
    },

    /// Write every analysis to an output directory
    Report {
        /// Output directory for results
        #[clap(long, default_value = "network_results")]
        output_dir: PathBuf,

        /// Skip visualizations
        #[clap(long)]
        skip_viz: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    // The dataset is loaded once and shared read-only by every request
    let dataset = Arc::new(loader::load_or_seed(args.dataset.as_deref())?);

    let mut config = Config::default();
    if let Command::Predict { threshold, top } = &args.command {
        config.prediction_threshold = *threshold;
        config.max_predictions = *top;
    }
    if let Command::Serve { bind } = &args.command {
        config = config.with_bind_address(bind.clone());
    }

    let analyzer = NetworkAnalyzer::new(dataset, Arc::new(config));

    match args.command {
        Command::Serve { .. } => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(num_threads)
                .enable_all()
                .build()?;
            runtime.block_on(server::serve(analyzer))?;
        }
        Command::Network => print_json(&analyzer.network())?,
        Command::Centrality { metric } => print_json(&analyzer.centrality(&metric)?)?,
        Command::Communities => print_json(&analyzer.communities())?,
        Command::Predict { .. } => print_json(&analyzer.predictions())?,
        Command::Protein { name } => print_json(&analyzer.protein(&name)?)?,
        Command::Report {
            output_dir,
            skip_viz,
        } => {
            storage::save_results(&analyzer, &output_dir)?;

            // Generate visualizations if requested
            if !skip_viz {
                viz::generate_visualizations(&analyzer, &output_dir)?;
            }

            log::info!("Analysis complete. Results saved to {}", output_dir.display());
        }
    }

    Ok(())
}
