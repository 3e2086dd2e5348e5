//! Registry invariants.
//!
//! Checks run in a fixed stage order: emptiness, type uniqueness, category
//! closure, tag format, descriptions, then sector/sub-sector consistency. In
//! fail-fast mode the first offending stage stops validation and its first
//! violation is reported; collect-all mode runs every stage so a
//! hand-maintained list can be fixed in one pass.

use crate::registry::Registry;
use crate::taxonomy::CategorySet;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("registry contains no equipment")]
    EmptyRegistry,
    #[error("equipment entry #{index} has an empty type")]
    MissingEquipmentType { index: usize },
    #[error("duplicate equipment type '{0}'")]
    DuplicateEquipmentType(String),
    #[error("equipment '{0}' references unknown category '{1}'")]
    UnknownCategory(String, String),
    #[error("equipment '{0}' has no tags")]
    MissingTags(String),
    #[error("equipment '{0}' has invalid tag '{1}' (expected [A-Z][A-Z0-9_]*)")]
    InvalidTag(String, String),
    #[error("equipment '{0}' repeats tag '{1}'")]
    DuplicateTag(String, String),
    #[error("equipment '{0}' has an empty description")]
    MissingDescription(String),
    #[error("sector code '{0}' must match [A-Z][A-Z0-9]*")]
    InvalidSectorCode(String),
    #[error("sub-sector '{1}' is not qualified by sector '{0}' (expected '{0}-<QUALIFIER>')")]
    SectorMismatch(String, String),
}

/// Every violation found by a validation run, in stage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [single] => write!(f, "{single}"),
            errors => {
                write!(f, "{} registry violations:", errors.len())?;
                for err in errors {
                    write!(f, "\n  - {err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationReport {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    FailFast,
    CollectAll,
}

/// A registry that satisfied every invariant.
///
/// Only this module constructs one; the emitter requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistry {
    registry: Registry,
}

impl ValidatedRegistry {
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Fail-fast validation: the first violation is returned.
pub fn validate(
    registry: &Registry,
    categories: &CategorySet,
) -> Result<ValidatedRegistry, ValidationError> {
    validate_with_mode(registry, categories, ValidationMode::FailFast).map_err(|report| {
        report
            .into_errors()
            .into_iter()
            .next()
            .unwrap_or(ValidationError::EmptyRegistry)
    })
}

/// Collect-all validation: every violation is returned.
pub fn validate_all(
    registry: &Registry,
    categories: &CategorySet,
) -> Result<ValidatedRegistry, ValidationReport> {
    validate_with_mode(registry, categories, ValidationMode::CollectAll)
}

type Stage = fn(&Registry, &CategorySet, &mut Vec<ValidationError>);

const STAGES: &[Stage] = &[
    check_non_empty,
    check_unique_types,
    check_categories,
    check_tags,
    check_descriptions,
    check_sector_codes,
];

pub fn validate_with_mode(
    registry: &Registry,
    categories: &CategorySet,
    mode: ValidationMode,
) -> Result<ValidatedRegistry, ValidationReport> {
    let mut errors = Vec::new();
    for stage in STAGES {
        stage(registry, categories, &mut errors);
        if mode == ValidationMode::FailFast && !errors.is_empty() {
            errors.truncate(1);
            break;
        }
    }

    if errors.is_empty() {
        Ok(ValidatedRegistry {
            registry: registry.clone(),
        })
    } else {
        Err(ValidationReport { errors })
    }
}

fn check_non_empty(registry: &Registry, _: &CategorySet, errors: &mut Vec<ValidationError>) {
    if registry.equipment.is_empty() {
        errors.push(ValidationError::EmptyRegistry);
    }
}

fn check_unique_types(registry: &Registry, _: &CategorySet, errors: &mut Vec<ValidationError>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for (index, entry) in registry.equipment.iter().enumerate() {
        if entry.kind.trim().is_empty() {
            errors.push(ValidationError::MissingEquipmentType { index });
            continue;
        }
        if !seen.insert(entry.kind.as_str()) && reported.insert(entry.kind.as_str()) {
            errors.push(ValidationError::DuplicateEquipmentType(entry.kind.clone()));
        }
    }
}

fn check_categories(
    registry: &Registry,
    categories: &CategorySet,
    errors: &mut Vec<ValidationError>,
) {
    for entry in &registry.equipment {
        if !categories.contains(&entry.category) {
            errors.push(ValidationError::UnknownCategory(
                entry.kind.clone(),
                entry.category.clone(),
            ));
        }
    }
}

fn check_tags(registry: &Registry, _: &CategorySet, errors: &mut Vec<ValidationError>) {
    for entry in &registry.equipment {
        if entry.tags.is_empty() {
            errors.push(ValidationError::MissingTags(entry.kind.clone()));
            continue;
        }
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for tag in &entry.tags {
            if !is_valid_tag(tag) {
                errors.push(ValidationError::InvalidTag(entry.kind.clone(), tag.clone()));
            } else if !seen.insert(tag.as_str()) {
                errors.push(ValidationError::DuplicateTag(entry.kind.clone(), tag.clone()));
            }
        }
    }
}

fn check_descriptions(registry: &Registry, _: &CategorySet, errors: &mut Vec<ValidationError>) {
    for entry in &registry.equipment {
        if entry.description.trim().is_empty() {
            errors.push(ValidationError::MissingDescription(entry.kind.clone()));
        }
    }
}

fn check_sector_codes(registry: &Registry, _: &CategorySet, errors: &mut Vec<ValidationError>) {
    let sector = &registry.sector;
    if !is_valid_sector_code(sector.as_str()) {
        errors.push(ValidationError::InvalidSectorCode(sector.0.clone()));
    }
    let qualified = registry
        .sub_sector
        .qualifier(sector)
        .is_some_and(is_valid_qualifier);
    if !qualified {
        errors.push(ValidationError::SectorMismatch(
            sector.0.clone(),
            registry.sub_sector.0.clone(),
        ));
    }
}

/// `[A-Z][A-Z0-9_]*`
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    }
}

/// `[A-Z][A-Z0-9]*`
pub fn is_valid_sector_code(code: &str) -> bool {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        }
        _ => false,
    }
}

fn is_valid_qualifier(qualifier: &str) -> bool {
    !qualifier.is_empty()
        && qualifier
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
