//! Registry document wiring.
//!
//! A registry is assembled from a taxonomy (`model::build`), checked against
//! its invariants (`validate`), and only then serialized to its artifact
//! (`emit`). The emitter accepts `ValidatedRegistry` exclusively, so an
//! unchecked registry cannot reach disk. `schema` holds the JSON Schema
//! contract that downstream readers of the artifact rely on.

pub mod emit;
pub mod model;
pub mod schema;
pub mod validate;

pub use emit::{EmitError, EmitReport, FileSink, RegistrySink, emit, render};
pub use model::{EquipmentEntry, Registry, build};
pub use schema::ArtifactSchema;
pub use validate::{
    ValidatedRegistry, ValidationError, ValidationMode, ValidationReport, validate, validate_all,
    validate_with_mode,
};
