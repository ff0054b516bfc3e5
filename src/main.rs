use clap::Parser;
use quern::prefix::{combine_candidates, expand_prefixes, identifying_prefix_size, reduce_prefixes};
use quern::tokens::read_tokens;
use quern::Engine;
use std::path::PathBuf;
use tracing::{debug, error};

/// Report the minimal identifying prefix size of a whitespace-delimited
/// token file.
#[derive(Parser)]
#[command(name = "quern")]
#[command(about = "Parallel batch aggregation demo: minimal identifying prefix size", long_about = None)]
struct Cli {
    /// Path to the input token file
    #[arg(short, long)]
    src: PathBuf,

    /// Number of map workers
    #[arg(short = 'm', long, default_value = "3")]
    map_workers: usize,

    /// Number of reduce workers
    #[arg(short = 'r', long, default_value = "3")]
    reduce_workers: usize,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let tokens = read_tokens(&cli.src)?;
    debug!("read {} tokens from {}", tokens.len(), cli.src.display());

    let engine = Engine::new(cli.map_workers, cli.reduce_workers)?;
    let winner = engine
        .run(tokens, expand_prefixes, reduce_prefixes, combine_candidates)
        .await?;

    println!(
        "Minimal identifying prefix size: {}",
        identifying_prefix_size(winner.as_ref())
    );
    Ok(())
}
