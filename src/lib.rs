//! Sector equipment registries.
//!
//! Curated taxonomies (`taxonomy`) are assembled into registry documents,
//! validated, and emitted as stable JSON artifacts (`registry`). `pipeline`
//! strings those steps together for the `registry-gen` and
//! `registry-validate` binaries; `config` resolves where artifacts go.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod taxonomy;

pub use config::GeneratorConfig;
pub use pipeline::{
    ArtifactStatus, ArtifactVerification, check_artifact, generate, verify_artifact,
    verify_artifact_with_schema,
};
pub use registry::{
    ArtifactSchema, EmitError, EmitReport, EquipmentEntry, FileSink, Registry, RegistrySink,
    ValidatedRegistry, ValidationError, ValidationMode, ValidationReport, build, emit, render,
    validate, validate_all, validate_with_mode,
};
pub use taxonomy::{CategorySet, SectorCode, SubSectorCode, TaxonomyDefinition};

use anyhow::{Context, Result, bail};
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

const ROOT_SENTINEL: &str = registry::schema::ARTIFACT_SCHEMA_PATH;

/// Overrides the repository root recorded at build time.
pub const ENV_ROOT: &str = "EQUIPMENT_REGISTRY_ROOT";

/// Locate the repository the generator writes into: `EQUIPMENT_REGISTRY_ROOT`
/// when set, otherwise the crate root `build.rs` recorded.
pub fn find_repo_root() -> Result<PathBuf> {
    resolve_repo_root(
        env::var_os(ENV_ROOT),
        option_env!("EQUIPMENT_REGISTRY_ROOT_HINT"),
    )
}

fn resolve_repo_root(env_value: Option<OsString>, build_hint: Option<&str>) -> Result<PathBuf> {
    let (origin, candidate) = match (env_value, build_hint) {
        (Some(value), _) if !value.is_empty() => (ENV_ROOT, PathBuf::from(value)),
        (_, Some(hint)) if !hint.is_empty() => ("build hint", PathBuf::from(hint)),
        _ => bail!("no repository root known; set {ENV_ROOT} or pass --out-dir"),
    };
    if !candidate.join(ROOT_SENTINEL).is_file() {
        bail!(
            "{} ({origin}) is not an equipment-registry checkout: missing {ROOT_SENTINEL}",
            candidate.display()
        );
    }
    candidate
        .canonicalize()
        .with_context(|| format!("resolving repository root {}", candidate.display()))
}

/// Default artifact directory under a repository root.
pub fn default_output_dir(repo_root: &Path) -> PathBuf {
    repo_root.join(config::DEFAULT_OUT_DIR)
}
