use std::env;
use std::path::PathBuf;

use reelseed_catalog::StaticCatalog;
use reelseed_generate::{GenerateOptions, GenerationEngine, render_summary};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut fixture: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut seed: u64 = 42;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fixture" => fixture = args.next().map(PathBuf::from),
            "--out" => out_dir = args.next().map(PathBuf::from),
            "--seed" => seed = args.next().ok_or("missing --seed value")?.parse()?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let fixture = fixture.unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/catalog.sample.json")
    });
    let catalog = StaticCatalog::from_path(&fixture)?;

    let mut options = GenerateOptions {
        seed,
        ..GenerateOptions::default()
    };
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }

    let result = GenerationEngine::new(options).run(&catalog).await?;
    print!("{}", render_summary(&result.report));
    Ok(())
}
