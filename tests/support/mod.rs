#![allow(dead_code)]

// Shared fixtures for the integration suites: compiled binaries, command
// runners, and small registries built in memory.

use anyhow::{Context, Result, bail};
use equipment_registry::{
    CategorySet, EquipmentEntry, SectorCode, SubSectorCode, TaxonomyDefinition,
};
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn registry_gen() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_registry-gen"))
}

pub fn registry_validate() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_registry-validate"))
}

/// Run a command and fail with its output when it exits non-zero.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail and return its output.
pub fn run_failing(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(output)
}

pub fn entry(kind: &str, category: &str, tags: &[&str]) -> EquipmentEntry {
    EquipmentEntry {
        kind: kind.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        description: format!("{kind} used as a test fixture."),
    }
}

pub fn fixture_taxonomy(
    sector: &str,
    sub_sector: &str,
    entries: Vec<EquipmentEntry>,
) -> TaxonomyDefinition {
    TaxonomyDefinition::new(
        "fixture",
        SectorCode::new(sector),
        SubSectorCode::new(sub_sector),
        CategorySet::core(),
        entries,
    )
}
