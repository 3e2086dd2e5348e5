//! Generator configuration.
//!
//! Resolution order for the artifact directory: `--out-dir`, then
//! `EQUIPMENT_REGISTRY_OUT_DIR`, then `resources/` under the repository root.
//! Sector selection defaults to every built-in taxonomy.

use crate::registry::ValidationMode;
use crate::taxonomy::{self, TaxonomyDefinition};
use anyhow::{Result, bail};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const ENV_OUT_DIR: &str = "EQUIPMENT_REGISTRY_OUT_DIR";
pub const DEFAULT_OUT_DIR: &str = "resources";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub mode: ValidationMode,
    pub taxonomies: Vec<TaxonomyDefinition>,
}

impl GeneratorConfig {
    /// Build a config from CLI inputs, consulting the process environment.
    pub fn resolve(
        out_dir: Option<PathBuf>,
        sectors: &[String],
        collect_all: bool,
    ) -> Result<Self> {
        let out_dir = resolve_out_dir(out_dir, env::var_os(ENV_OUT_DIR), || {
            crate::find_repo_root().map(|root| crate::default_output_dir(&root))
        })?;
        Ok(Self {
            out_dir,
            mode: if collect_all {
                ValidationMode::CollectAll
            } else {
                ValidationMode::FailFast
            },
            taxonomies: select_taxonomies(sectors)?,
        })
    }

    /// Where the artifact for `definition` is written.
    pub fn artifact_path(&self, definition: &TaxonomyDefinition) -> PathBuf {
        artifact_path(&self.out_dir, definition)
    }
}

pub fn artifact_path(out_dir: &Path, definition: &TaxonomyDefinition) -> PathBuf {
    out_dir.join(definition.artifact_file_name())
}

/// Pick the artifact directory from the flag, the env value, or the fallback.
pub fn resolve_out_dir<F>(
    flag: Option<PathBuf>,
    env_value: Option<OsString>,
    fallback: F,
) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(raw) = env_value.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(raw));
    }
    fallback()
}

/// Resolve sector names or codes to taxonomies, keeping first-seen order.
pub fn select_taxonomies(keys: &[String]) -> Result<Vec<TaxonomyDefinition>> {
    if keys.is_empty() {
        return Ok(taxonomy::builtin());
    }

    let mut selected: Vec<TaxonomyDefinition> = Vec::new();
    for key in keys {
        let Some(definition) = taxonomy::find(key) else {
            bail!(
                "unknown sector '{key}'; expected one of: {}",
                taxonomy::builtin_names().join(", ")
            );
        };
        if !selected.iter().any(|d| d.name() == definition.name()) {
            selected.push(definition);
        }
    }
    Ok(selected)
}
