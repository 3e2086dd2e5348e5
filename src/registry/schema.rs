//! JSON Schema contract for emitted registry artifacts.
//!
//! The schema pins the artifact shape downstream readers index on: key names,
//! nesting, tag and code patterns. It does not know the category enumeration;
//! category closure stays with the validator. A copy is compiled into the
//! crate so verification works without a checkout; `load` reads a schema file
//! instead, which is how `registry-validate --schema` checks artifacts against
//! a stricter downstream contract.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Path of the bundled schema relative to the repository root.
pub const ARTIFACT_SCHEMA_PATH: &str = "schema/equipment_registry.schema.json";

const BUNDLED_SCHEMA: &str = include_str!("../../schema/equipment_registry.schema.json");

#[derive(Debug)]
pub struct ArtifactSchema {
    compiled: JSONSchema,
}

impl ArtifactSchema {
    /// Compile the schema shipped with the crate.
    pub fn bundled() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(BUNDLED_SCHEMA).context("parsing bundled artifact schema")?;
        Self::compile(&raw, ARTIFACT_SCHEMA_PATH)
    }

    /// Compile a schema file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&raw, &path.display().to_string())
    }

    fn compile(raw: &Value, origin: &str) -> Result<Self> {
        let compiled = JSONSchema::compile(raw)
            .map_err(|err| anyhow!("compiling schema {origin}: {err}"))?;
        Ok(Self { compiled })
    }

    /// Check an artifact; every schema violation is listed in the error.
    pub fn validate(&self, artifact: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(artifact) {
            let details = errors
                .map(|err| {
                    let pointer = err.instance_path.to_string();
                    if pointer.is_empty() {
                        err.to_string()
                    } else {
                        format!("{pointer}: {err}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            bail!("registry artifact failed schema validation:\n{}", details);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artifact() -> Value {
        json!({
            "sector": "NUCL",
            "subSector": "NUCL-ALL",
            "equipment": [{
                "type": "Pressurizer",
                "category": "static",
                "tags": ["VESSEL", "PRESSURE_CONTROL", "PWR"],
                "description": "Vessel maintaining primary circuit pressure via heaters and spray."
            }]
        })
    }

    #[test]
    fn bundled_schema_accepts_artifact() {
        let schema = ArtifactSchema::bundled().unwrap();
        schema.validate(&artifact()).unwrap();
    }

    #[test]
    fn rejects_renamed_keys() {
        let schema = ArtifactSchema::bundled().unwrap();
        let mut value = artifact();
        let obj = value.as_object_mut().unwrap();
        let sub = obj.remove("subSector").unwrap();
        obj.insert("sub_sector".to_string(), sub);
        assert!(schema.validate(&value).is_err());
    }

    #[test]
    fn reports_pointer_for_bad_tag() {
        let schema = ArtifactSchema::bundled().unwrap();
        let mut value = artifact();
        value["equipment"][0]["tags"][1] = json!("pressure");
        let err = schema.validate(&value).unwrap_err().to_string();
        assert!(err.contains("/equipment/0/tags/1"), "{err}");
    }

    #[test]
    fn load_compiles_schema_from_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nuclear_only.schema.json");
        std::fs::write(
            &path,
            r#"{"type": "object", "properties": {"sector": {"const": "NUCL"}}}"#,
        )
        .unwrap();

        let schema = ArtifactSchema::load(&path).unwrap();
        schema.validate(&artifact()).unwrap();
        let mut water = artifact();
        water["sector"] = json!("WATR");
        let err = schema.validate(&water).unwrap_err().to_string();
        assert!(err.contains("/sector"), "{err}");

        let missing = ArtifactSchema::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(missing.to_string().contains("opening schema"));
    }

    #[test]
    fn rejects_empty_equipment() {
        let schema = ArtifactSchema::bundled().unwrap();
        let mut value = artifact();
        value["equipment"] = json!([]);
        assert!(schema.validate(&value).is_err());
    }
}
