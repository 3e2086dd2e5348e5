//! Validate an emitted registry artifact.
//!
//! Usage:
//!   registry-validate --file resources/water_registry.json
//!   registry-validate --category static --category piping < registry.json
//!   registry-validate --strict --file resources/nuclear_registry.json
//!   registry-validate --schema consumer.schema.json --file resources/water_registry.json

use anyhow::{Context, Result, bail};
use clap::Parser;
use equipment_registry::{
    ArtifactSchema, CategorySet, ValidationMode, logging, taxonomy, verify_artifact_with_schema,
};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "registry-validate")]
#[command(about = "Check a registry artifact against its schema and invariants")]
struct Cli {
    /// Artifact to check; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Built-in sector whose categories apply. Inferred from the artifact when omitted.
    #[arg(long)]
    sector: Option<String>,
    /// Allowed category (repeatable); overrides the sector's set.
    #[arg(long = "category", value_name = "CATEGORY")]
    categories: Vec<String>,
    /// Report every violation instead of stopping at the first.
    #[arg(long)]
    collect_all: bool,
    /// Also require the bytes to match the generator's canonical output.
    #[arg(long)]
    strict: bool,
    /// Schema file to check against instead of the bundled contract.
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_end(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_end(&mut buf)
            .context("reading stdin for registry JSON")?;
    }
    Ok(buf)
}

fn resolve_categories(cli: &Cli, input: &[u8]) -> Result<CategorySet> {
    if !cli.categories.is_empty() {
        return Ok(CategorySet::new(cli.categories.iter().cloned()));
    }

    let key = match &cli.sector {
        Some(sector) => sector.clone(),
        None => {
            let value: Value = serde_json::from_slice(input).context("parsing input JSON")?;
            match value.get("sector").and_then(Value::as_str) {
                Some(code) => code.to_string(),
                None => bail!("artifact has no sector; pass --sector or --category"),
            }
        }
    };
    match taxonomy::find(&key) {
        Some(definition) => Ok(definition.categories().clone()),
        None => bail!(
            "no built-in taxonomy for sector '{key}'; pass --category to name the allowed categories"
        ),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let input = read_input(cli.file.as_ref())?;
    let categories = resolve_categories(&cli, &input)?;
    let mode = if cli.collect_all {
        ValidationMode::CollectAll
    } else {
        ValidationMode::FailFast
    };

    let schema = match &cli.schema {
        Some(path) => ArtifactSchema::load(path)?,
        None => ArtifactSchema::bundled()?,
    };

    let verification = verify_artifact_with_schema(&input, &schema, &categories, mode)?;
    let registry = verification.registry.registry();
    if cli.strict && !verification.canonical {
        bail!(
            "{}/{} artifact is valid but differs from the generator's output; re-run registry-gen",
            registry.sector,
            registry.sub_sector
        );
    }

    println!(
        "{}/{}: {} entries valid",
        registry.sector,
        registry.sub_sector,
        registry.len()
    );
    Ok(())
}
