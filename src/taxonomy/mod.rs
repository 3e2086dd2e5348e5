//! Curated equipment taxonomies.
//!
//! Each sector ships a hand-maintained list of equipment entries compiled into
//! the binary, together with its sector/sub-sector codes and the closed set of
//! categories its entries are classified against. Nothing here is parsed at
//! runtime; a `TaxonomyDefinition` is plain data handed to the registry
//! builder.

pub mod chemical;
pub mod nuclear;
pub mod water;

use crate::registry::{EquipmentEntry, Registry, build};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Top-level infrastructure domain, e.g. `WATR`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorCode(pub String);

/// Industry vertical inside a sector, spelled `{sector}-{qualifier}`, e.g. `WATR-DW`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubSectorCode(pub String);

impl SectorCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SubSectorCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after `{sector}-`, when this code belongs to `sector`.
    pub fn qualifier(&self, sector: &SectorCode) -> Option<&str> {
        self.0
            .strip_prefix(sector.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
    }
}

impl fmt::Display for SectorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SubSectorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const CATEGORY_ROTATING: &str = "rotating";
pub const CATEGORY_STATIC: &str = "static";
pub const CATEGORY_PIPING: &str = "piping";
pub const CATEGORY_INSTRUMENTATION: &str = "instrumentation";
pub const CATEGORY_ELECTRICAL: &str = "electrical";
pub const CATEGORY_HEAT_TRANSFER: &str = "heat-transfer";

/// Closed enumeration of categories a registry accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet(BTreeSet<String>);

impl CategorySet {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(categories.into_iter().map(Into::into).collect())
    }

    /// Mechanical, piping, instrumentation, and electrical classes.
    pub fn core() -> Self {
        Self::new([
            CATEGORY_ROTATING,
            CATEGORY_STATIC,
            CATEGORY_PIPING,
            CATEGORY_INSTRUMENTATION,
            CATEGORY_ELECTRICAL,
        ])
    }

    /// `core()` plus `heat-transfer`, for thermal process plants.
    pub fn process() -> Self {
        let mut set = Self::core();
        set.0.insert(CATEGORY_HEAT_TRANSFER.to_string());
        set
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    /// Iterates categories in stable (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compile-time form of an [`EquipmentEntry`].
#[derive(Debug, Clone, Copy)]
pub struct EntrySeed {
    pub kind: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
}

impl EntrySeed {
    pub const fn new(
        kind: &'static str,
        category: &'static str,
        tags: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            category,
            tags,
            description,
        }
    }

    pub fn to_entry(&self) -> EquipmentEntry {
        EquipmentEntry {
            kind: self.kind.to_string(),
            category: self.category.to_string(),
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            description: self.description.to_string(),
        }
    }
}

/// Authoritative source list for one registry.
#[derive(Debug, Clone)]
pub struct TaxonomyDefinition {
    name: String,
    sector: SectorCode,
    sub_sector: SubSectorCode,
    categories: CategorySet,
    entries: Vec<EquipmentEntry>,
}

impl TaxonomyDefinition {
    pub fn new(
        name: impl Into<String>,
        sector: SectorCode,
        sub_sector: SubSectorCode,
        categories: CategorySet,
        entries: Vec<EquipmentEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            sector,
            sub_sector,
            categories,
            entries,
        }
    }

    pub fn from_seeds(
        name: &str,
        sector: &str,
        sub_sector: &str,
        categories: CategorySet,
        seeds: &[EntrySeed],
    ) -> Self {
        Self::new(
            name,
            SectorCode::new(sector),
            SubSectorCode::new(sub_sector),
            categories,
            seeds.iter().map(EntrySeed::to_entry).collect(),
        )
    }

    /// Short lowercase name used for artifact file names and CLI selection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered entries and the two classification codes.
    pub fn parts(&self) -> (&SectorCode, &SubSectorCode, &[EquipmentEntry]) {
        (&self.sector, &self.sub_sector, &self.entries)
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Artifact file name, e.g. `water_registry.json`.
    pub fn artifact_file_name(&self) -> String {
        format!("{}_registry.json", self.name)
    }

    /// Assemble the registry document for this taxonomy.
    pub fn build(&self) -> Registry {
        build(
            self.sector.clone(),
            self.sub_sector.clone(),
            self.entries.clone(),
        )
    }
}

/// Every taxonomy compiled into the crate, in stable order.
pub fn builtin() -> Vec<TaxonomyDefinition> {
    vec![
        water::definition(),
        nuclear::definition(),
        chemical::definition(),
    ]
}

/// Names accepted by [`find`].
pub fn builtin_names() -> Vec<&'static str> {
    vec![water::NAME, nuclear::NAME, chemical::NAME]
}

/// Look up a built-in taxonomy by name (`water`) or sector code (`WATR`).
pub fn find(key: &str) -> Option<TaxonomyDefinition> {
    builtin()
        .into_iter()
        .find(|def| def.name() == key || def.sector.as_str() == key)
}
