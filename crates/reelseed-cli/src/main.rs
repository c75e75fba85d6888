mod config;
mod logging;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use reelseed_catalog::{CatalogError, CatalogSource, StaticCatalog, TmdbCatalog};
use reelseed_core::GENRES;
use reelseed_generate::{
    GenerateOptions, GenerationEngine, GenerationError, render_summary, write_report_json,
};
use thiserror::Error;

use config::{ConfigError, DEFAULT_CONFIG_FILE, SeedConfig, load_config, save_config};
use logging::{LoggingError, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "reelseed", version, about = "Video store sample data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the catalog and write the five seed CSV files.
    Generate(GenerateArgs),
    /// List the genres fetched from the catalog.
    Genres,
    /// Write a config file with the default settings.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Config file (defaults to ./reelseed.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory for the CSV files.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for all random draws.
    #[arg(long)]
    seed: Option<u64>,
    /// Date treated as today (YYYY-MM-DD).
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,
    /// Number of customers to generate.
    #[arg(long)]
    customers: Option<usize>,
    /// Number of rentals (sampled videos and customers).
    #[arg(long)]
    sample_size: Option<usize>,
    /// Write a header row to each file.
    #[arg(long, default_value_t = false)]
    headers: bool,
    /// Read movies from a JSON fixture instead of the catalog service.
    #[arg(long, value_name = "FILE")]
    catalog_fixture: Option<PathBuf>,
    /// Result pages fetched per genre.
    #[arg(long)]
    pages: Option<u32>,
    /// Catalog language tag (e.g. en-US).
    #[arg(long)]
    language: Option<String>,
    /// Also write the run report as JSON.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    /// Append JSON logs to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    /// Where to write the config file.
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    path: PathBuf,
    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Genres => {
            for genre in &GENRES {
                println!("{:>6}  {}", genre.catalog_id, genre.label);
            }
            Ok(())
        }
        Command::InitConfig(args) => run_init_config(args),
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    init_logging(args.log_file.as_deref())?;

    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let source: Box<dyn CatalogSource> = match &args.catalog_fixture {
        Some(path) => {
            tracing::info!(event = "catalog_fixture", path = %path.display());
            Box::new(StaticCatalog::from_path(path)?)
        }
        None => Box::new(TmdbCatalog::from_env(config.catalog.clone())?),
    };

    let seed_source = if config.seed.is_some() { "fixed" } else { "random" };
    tracing::info!(
        event = "run_started",
        seed,
        seed_source,
        today = %today,
        catalog = source.name()
    );

    let options = GenerateOptions {
        out_dir: config.out_dir.clone(),
        seed,
        today,
        customers: config.customers,
        sample_size: config.sample_size,
        include_headers: config.include_headers,
    };
    let engine = GenerationEngine::new(options);
    let result = engine.run(source.as_ref()).await?;

    print!("{}", render_summary(&result.report));

    if let Some(path) = &args.report {
        write_report_json(path, &result.report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms = result.report.duration_ms
    );
    Ok(())
}

fn apply_overrides(config: &mut SeedConfig, args: &GenerateArgs) {
    if let Some(out) = &args.out {
        config.out_dir = out.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(customers) = args.customers {
        config.customers = customers;
    }
    if let Some(sample_size) = args.sample_size {
        config.sample_size = sample_size;
    }
    if args.headers {
        config.include_headers = true;
    }
    if let Some(pages) = args.pages {
        config.catalog.pages = pages;
    }
    if let Some(language) = &args.language {
        config.catalog.language = language.clone();
    }
}

fn run_init_config(args: InitConfigArgs) -> Result<(), CliError> {
    if args.path.exists() && !args.force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }
    save_config(&args.path, &SeedConfig::default())?;
    println!("wrote {}", args.path.display());
    Ok(())
}
