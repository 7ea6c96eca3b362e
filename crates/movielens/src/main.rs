use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use movielens_core::config::parse_timezone;
use movielens_core::{pipeline, ConfigFile, DuplicatePolicy, PipelineConfig};
use movielens_parser::InputEncoding;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Merge MovieLens ratings with movie metadata into one CSV", long_about = None)]
struct Cli {
    /// TOML file with pipeline settings; flags and environment take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tab separated ratings file (user_id, movie_id, rating, timestamp)
    #[arg(long, env = "MOVIELENS_RATINGS_PATH")]
    ratings: Option<PathBuf>,
    /// Pipe separated movie metadata file
    #[arg(long, env = "MOVIELENS_MOVIES_PATH")]
    movies: Option<PathBuf>,
    /// Destination CSV, replaced atomically on success
    #[arg(long, env = "MOVIELENS_OUTPUT_PATH")]
    output: Option<PathBuf>,
    /// Input encoding: latin-1, windows-1252 or utf-8
    #[arg(long)]
    encoding: Option<InputEncoding>,
    /// IANA time zone used to render rating timestamps
    #[arg(long, env = "MOVIELENS_TIMEZONE")]
    timezone: Option<String>,
    /// Handling of repeated movie ids: reject or fan-out
    #[arg(long)]
    duplicate_movies: Option<DuplicatePolicy>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    debug!(?config, "resolved configuration");

    let summary = pipeline::run(&config).with_context(|| {
        format!(
            "failed to build {} from {} and {}",
            config.output_path.display(),
            config.ratings_path.display(),
            config.movies_path.display()
        )
    })?;

    println!("✅ Cleaned data saved to {}", summary.output_path.display());
    Ok(())
}

fn resolve_config(cli: Cli) -> Result<PipelineConfig> {
    let mut config = PipelineConfig::default();

    if let Some(path) = cli.config.as_deref() {
        ConfigFile::load(path)
            .and_then(|file| file.apply(&mut config))
            .with_context(|| format!("failed to load config file {}", path.display()))?;
    }

    if let Some(path) = cli.ratings {
        config.ratings_path = path;
    }
    if let Some(path) = cli.movies {
        config.movies_path = path;
    }
    if let Some(path) = cli.output {
        config.output_path = path;
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }
    if let Some(name) = cli.timezone.as_deref() {
        config.timezone = parse_timezone(name)?;
    }
    if let Some(policy) = cli.duplicate_movies {
        config.duplicate_movies = policy;
    }

    Ok(config)
}
