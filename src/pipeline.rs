//! Build → validate → emit, plus the read-side checks used by CI.
//!
//! `generate` is the whole build step for one taxonomy. `check_artifact`
//! answers "would regenerating change the file?" without writing, and
//! `verify_artifact` re-checks an artifact that is already on disk.

use crate::registry::{
    ArtifactSchema, EmitReport, Registry, RegistrySink, ValidatedRegistry, ValidationMode, emit,
    render, validate_with_mode,
};
use crate::taxonomy::{CategorySet, TaxonomyDefinition};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, info_span, warn};

/// Run the full build step for one taxonomy into `sink`.
pub fn generate<S: RegistrySink + ?Sized>(
    definition: &TaxonomyDefinition,
    sink: &mut S,
    mode: ValidationMode,
) -> Result<EmitReport> {
    let _span = info_span!("generate", taxonomy = definition.name()).entered();

    let validated = build_validated(definition, mode)?;
    let report = emit(&validated, sink)
        .with_context(|| format!("emitting {} registry", definition.name()))?;
    info!(
        location = %report.location,
        entries = report.entries,
        bytes = report.bytes,
        "emitted registry"
    );
    Ok(report)
}

fn build_validated(
    definition: &TaxonomyDefinition,
    mode: ValidationMode,
) -> Result<ValidatedRegistry> {
    let registry = definition.build();
    debug!(
        sector = %registry.sector,
        sub_sector = %registry.sub_sector,
        entries = registry.len(),
        "assembled registry"
    );
    let validated = validate_with_mode(&registry, definition.categories(), mode)
        .with_context(|| format!("validating {} registry", definition.name()))?;
    debug!("registry passed validation");
    Ok(validated)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Compare the artifact at `path` with what `generate` would write.
pub fn check_artifact(
    definition: &TaxonomyDefinition,
    path: &Path,
    mode: ValidationMode,
) -> Result<ArtifactStatus> {
    let validated = build_validated(definition, mode)?;
    let expected = render(&validated)
        .with_context(|| format!("rendering {} registry", definition.name()))?;

    let status = match fs::read(path) {
        Ok(current) if current == expected => ArtifactStatus::UpToDate,
        Ok(_) => ArtifactStatus::Stale,
        Err(err) if err.kind() == ErrorKind::NotFound => ArtifactStatus::Missing,
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };
    if status != ArtifactStatus::UpToDate {
        warn!(path = %path.display(), ?status, "registry artifact out of date");
    }
    Ok(status)
}

/// Result of re-checking an emitted artifact.
#[derive(Debug, Clone)]
pub struct ArtifactVerification {
    pub registry: ValidatedRegistry,
    /// Whether the bytes are exactly what the emitter would produce.
    pub canonical: bool,
}

/// Parse an artifact, check it against the bundled schema contract and the
/// registry invariants, and compare it with its canonical rendering.
pub fn verify_artifact(
    bytes: &[u8],
    categories: &CategorySet,
    mode: ValidationMode,
) -> Result<ArtifactVerification> {
    verify_artifact_with_schema(bytes, &ArtifactSchema::bundled()?, categories, mode)
}

/// `verify_artifact` against a caller-supplied schema.
pub fn verify_artifact_with_schema(
    bytes: &[u8],
    schema: &ArtifactSchema,
    categories: &CategorySet,
    mode: ValidationMode,
) -> Result<ArtifactVerification> {
    let value: Value = serde_json::from_slice(bytes).context("parsing registry artifact")?;
    schema.validate(&value)?;

    let registry: Registry =
        serde_json::from_value(value).context("decoding registry artifact")?;
    let validated = validate_with_mode(&registry, categories, mode).with_context(|| {
        format!(
            "validating {}/{} artifact",
            registry.sector, registry.sub_sector
        )
    })?;
    let canonical = render(&validated)? == bytes;
    if !canonical {
        warn!(sector = %registry.sector, "artifact is valid but not in canonical form");
    }
    Ok(ArtifactVerification {
        registry: validated,
        canonical,
    })
}
