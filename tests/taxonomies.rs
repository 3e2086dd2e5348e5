// Guard rails for the curated, compiled-in taxonomies.
mod support;

use anyhow::Result;
use equipment_registry::registry::validate::is_valid_tag;
use equipment_registry::taxonomy::{self, CATEGORY_HEAT_TRANSFER, chemical, nuclear, water};
use equipment_registry::{CategorySet, validate, validate_all};
use std::collections::BTreeSet;

#[test]
fn every_builtin_taxonomy_validates() -> Result<()> {
    for definition in taxonomy::builtin() {
        let registry = definition.build();
        if let Err(report) = validate_all(&registry, definition.categories()) {
            panic!("{} taxonomy is invalid: {report}", definition.name());
        }
    }
    Ok(())
}

#[test]
fn water_registry_shape() -> Result<()> {
    let definition = water::definition();
    let validated = validate(&definition.build(), definition.categories())?;
    let registry = validated.registry();
    assert_eq!(registry.sector.as_str(), "WATR");
    assert_eq!(registry.sub_sector.as_str(), "WATR-DW");
    assert_eq!(registry.len(), 68);
    assert_eq!(definition.categories(), &CategorySet::core());
    assert_eq!(
        registry.equipment.first().map(|e| e.kind.as_str()),
        Some("Bar Screen (Coarse)")
    );
    Ok(())
}

#[test]
fn process_sectors_allow_heat_transfer() {
    for definition in [nuclear::definition(), chemical::definition()] {
        assert!(definition.categories().contains(CATEGORY_HEAT_TRANSFER));
        let (_, _, entries) = definition.parts();
        assert!(
            entries.iter().any(|e| e.category == CATEGORY_HEAT_TRANSFER),
            "{} should classify heat exchangers",
            definition.name()
        );
    }
    assert_eq!(nuclear::definition().parts().2.len(), 68);
    assert_eq!(chemical::definition().parts().2.len(), 71);
}

#[test]
fn builtin_types_are_unique_and_tags_well_formed() {
    for definition in taxonomy::builtin() {
        let (sector, sub_sector, entries) = definition.parts();
        assert!(
            sub_sector.as_str().starts_with(&format!("{sector}-")),
            "{sub_sector} should be qualified by {sector}"
        );

        let mut kinds = BTreeSet::new();
        for entry in entries {
            assert!(kinds.insert(entry.kind.as_str()), "duplicate {}", entry.kind);
            assert!(definition.categories().contains(&entry.category));
            assert!(!entry.tags.is_empty(), "{} has no tags", entry.kind);
            for tag in &entry.tags {
                assert!(is_valid_tag(tag), "{}: bad tag {tag}", entry.kind);
            }
            assert!(!entry.description.trim().is_empty());
        }
    }
}

#[test]
fn artifact_names_are_distinct() {
    let names: BTreeSet<_> = taxonomy::builtin()
        .iter()
        .map(|d| d.artifact_file_name())
        .collect();
    assert_eq!(names.len(), taxonomy::builtin().len());
    assert!(names.contains("water_registry.json"));
}
