//! Registry artifact emission.
//!
//! `render` produces the canonical bytes (two-space indented JSON, artifact
//! key order, no trailing newline); `emit` hands them to a `RegistrySink`.
//! `FileSink` replaces the target atomically: bytes land in a temporary file
//! next to the target, which is then renamed over it, so readers never see a
//! half-written catalog.

use crate::registry::ValidatedRegistry;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("serializing registry {sector}/{sub_sector}")]
    Serialize {
        sector: String,
        sub_sector: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("writing registry artifact {location}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a successful emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub location: String,
    pub entries: usize,
    pub bytes: usize,
}

/// Destination for a rendered registry. Each write replaces prior contents.
pub trait RegistrySink {
    /// Human-readable location used in reports and errors.
    fn location(&self) -> String;

    fn write_artifact(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl RegistrySink for Vec<u8> {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn write_artifact(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.clear();
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Writes the artifact to a fixed path, creating missing parent directories.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegistrySink for FileSink {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write_artifact(&mut self, bytes: &[u8]) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(bytes)?;
        staged.as_file().sync_all()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

/// Canonical artifact bytes for a validated registry.
pub fn render(validated: &ValidatedRegistry) -> Result<Vec<u8>, EmitError> {
    let registry = validated.registry();
    serde_json::to_vec_pretty(registry).map_err(|source| EmitError::Serialize {
        sector: registry.sector.0.clone(),
        sub_sector: registry.sub_sector.0.clone(),
        source,
    })
}

/// Render and write a validated registry. No retries; I/O failures surface as-is.
pub fn emit<S: RegistrySink + ?Sized>(
    validated: &ValidatedRegistry,
    sink: &mut S,
) -> Result<EmitReport, EmitError> {
    let bytes = render(validated)?;
    let location = sink.location();
    sink.write_artifact(&bytes)
        .map_err(|source| EmitError::Io {
            location: location.clone(),
            source,
        })?;
    Ok(EmitReport {
        location,
        entries: validated.registry().len(),
        bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{EquipmentEntry, Registry, build, validate};
    use crate::taxonomy::{CategorySet, SectorCode, SubSectorCode};
    use tempfile::TempDir;

    fn validated() -> ValidatedRegistry {
        let registry = build(
            SectorCode::new("WATR"),
            SubSectorCode::new("WATR-DW"),
            vec![EquipmentEntry {
                kind: "Parshall Flume".to_string(),
                category: "static".to_string(),
                tags: vec!["FLOW".to_string(), "MEASUREMENT".to_string()],
                description: "Open channel flow metering structure.".to_string(),
            }],
        );
        validate(&registry, &CategorySet::core()).unwrap()
    }

    #[test]
    fn render_matches_artifact_layout() {
        let bytes = render(&validated()).unwrap();
        let expected = r#"{
  "sector": "WATR",
  "subSector": "WATR-DW",
  "equipment": [
    {
      "type": "Parshall Flume",
      "category": "static",
      "tags": [
        "FLOW",
        "MEASUREMENT"
      ],
      "description": "Open channel flow metering structure."
    }
  ]
}"#;
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn memory_sink_is_overwritten() {
        let mut sink: Vec<u8> = b"stale contents that are longer than nothing".to_vec();
        let report = emit(&validated(), &mut sink).unwrap();
        assert_eq!(report.entries, 1);
        assert_eq!(report.bytes, sink.len());
        assert_eq!(report.location, "<memory>");
        let parsed: Registry = serde_json::from_slice(&sink).unwrap();
        assert_eq!(&parsed, validated().registry());
    }

    #[test]
    fn file_sink_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested/resources/water_registry.json");
        let mut sink = FileSink::new(&target);
        let report = emit(&validated(), &mut sink).unwrap();
        assert_eq!(report.location, target.display().to_string());
        assert_eq!(fs::read(&target).unwrap(), render(&validated()).unwrap());
    }

    #[test]
    fn file_sink_replaces_existing_artifact() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("water_registry.json");
        fs::write(&target, "{\"old\": true, \"padding\": \"...........................\"}")
            .unwrap();
        emit(&validated(), &mut FileSink::new(&target)).unwrap();
        assert_eq!(fs::read(&target).unwrap(), render(&validated()).unwrap());
        let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1, "staging file should be renamed away");
    }

    #[test]
    fn file_sink_reports_io_failure() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let mut sink = FileSink::new(blocker.join("water_registry.json"));
        let err = emit(&validated(), &mut sink).unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
        assert!(err.to_string().contains("water_registry.json"));
    }
}
