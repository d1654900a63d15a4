//! Command-line driver for the CLDR unit pattern generator

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cldr_units_gen::Generator;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cldr_units_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: cldr-units-gen <dataset-root> <output-dir>");
    }

    let dataset_root = Path::new(&args[1]);
    if !dataset_root.is_dir() {
        bail!("dataset root '{}' does not exist", dataset_root.display());
    }
    let output_dir = Path::new(&args[2]);

    let mut generator = Generator::new();
    generator
        .ingest_dataset_root(dataset_root)
        .context("failed to ingest dataset")?;
    let summary = generator
        .write_output(output_dir)
        .context("failed to write generated data")?;

    info!(
        "Generated {} units from {} documents",
        summary.units, summary.documents
    );
    Ok(())
}
