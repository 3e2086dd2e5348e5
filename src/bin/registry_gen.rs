//! Build step that regenerates the sector equipment registries.
//!
//! Usage:
//!   registry-gen                      # every built-in sector into resources/
//!   registry-gen --sector water       # one sector
//!   registry-gen --check              # fail if any artifact is stale
//!   registry-gen --list

use anyhow::{Result, bail};
use clap::Parser;
use equipment_registry::{
    ArtifactStatus, FileSink, GeneratorConfig, TaxonomyDefinition, check_artifact, generate,
    logging, taxonomy,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "registry-gen")]
#[command(about = "Validate curated equipment taxonomies and emit registry artifacts")]
struct Cli {
    /// Sector name or code to generate (repeatable). Defaults to every built-in sector.
    #[arg(long = "sector", value_name = "NAME")]
    sectors: Vec<String>,
    /// Artifact directory (or set EQUIPMENT_REGISTRY_OUT_DIR).
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
    /// Report every violation instead of stopping at the first.
    #[arg(long)]
    collect_all: bool,
    /// Compare artifacts with a fresh rendering instead of writing them.
    #[arg(long)]
    check: bool,
    /// Print the built-in sectors and exit.
    #[arg(long, conflicts_with_all = ["check", "sectors", "out_dir"])]
    list: bool,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.list {
        list_builtin();
        return Ok(());
    }

    let config = GeneratorConfig::resolve(cli.out_dir, &cli.sectors, cli.collect_all)?;
    let mut failed = 0usize;
    for definition in &config.taxonomies {
        let outcome = if cli.check {
            check_one(&config, definition)
        } else {
            generate_one(&config, definition)
        };
        if let Err(err) = outcome {
            eprintln!("{err:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!(
            "{failed} of {} registries failed",
            config.taxonomies.len()
        );
    }
    Ok(())
}

fn generate_one(config: &GeneratorConfig, definition: &TaxonomyDefinition) -> Result<()> {
    let path = config.artifact_path(definition);
    let mut sink = FileSink::new(&path);
    let report = generate(definition, &mut sink, config.mode)?;
    println!(
        "Successfully generated {} registry with {} items at: {}",
        definition.name(),
        report.entries,
        path.display()
    );
    Ok(())
}

fn check_one(config: &GeneratorConfig, definition: &TaxonomyDefinition) -> Result<()> {
    let path = config.artifact_path(definition);
    match check_artifact(definition, &path, config.mode)? {
        ArtifactStatus::UpToDate => {
            println!("{} registry is up to date: {}", definition.name(), path.display());
            Ok(())
        }
        ArtifactStatus::Stale => bail!(
            "{} registry is stale: {} (run registry-gen)",
            definition.name(),
            path.display()
        ),
        ArtifactStatus::Missing => bail!(
            "{} registry is missing: {} (run registry-gen)",
            definition.name(),
            path.display()
        ),
    }
}

fn list_builtin() {
    for definition in taxonomy::builtin() {
        let (sector, sub_sector, entries) = definition.parts();
        println!(
            "{}\t{}\t{}\t{} entries",
            definition.name(),
            sector,
            sub_sector,
            entries.len()
        );
    }
}
