use crate::taxonomy::{SectorCode, SubSectorCode};
use serde::{Deserialize, Serialize};

/// One classifiable kind of physical equipment.
///
/// Field order here is the key order of the emitted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquipmentEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// The persisted catalog document for one sector/sub-sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    pub sector: SectorCode,
    #[serde(rename = "subSector")]
    pub sub_sector: SubSectorCode,
    pub equipment: Vec<EquipmentEntry>,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.equipment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }
}

/// Assemble a registry from its parts.
///
/// Permissive: nothing is checked here, entry order is kept as given.
pub fn build(
    sector: SectorCode,
    sub_sector: SubSectorCode,
    entries: Vec<EquipmentEntry>,
) -> Registry {
    Registry {
        sector,
        sub_sector,
        equipment: entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(kind: &str) -> EquipmentEntry {
        EquipmentEntry {
            kind: kind.to_string(),
            category: "static".to_string(),
            tags: vec!["TANK".to_string()],
            description: format!("{kind} fixture."),
        }
    }

    #[test]
    fn build_preserves_entry_order() {
        let registry = build(
            SectorCode::new("WATR"),
            SubSectorCode::new("WATR-DW"),
            vec![entry("Zeta"), entry("Alpha"), entry("Mu")],
        );
        let kinds: Vec<_> = registry.equipment.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn build_accepts_empty_entries() {
        let registry = build(SectorCode::new("WATR"), SubSectorCode::new("WATR-DW"), vec![]);
        assert!(registry.is_empty());
    }

    #[test]
    fn serializes_with_artifact_field_names() {
        let registry = build(
            SectorCode::new("WATR"),
            SubSectorCode::new("WATR-DW"),
            vec![entry("Lime Silo")],
        );
        let value = serde_json::to_value(&registry).unwrap();
        assert_eq!(
            value,
            json!({
                "sector": "WATR",
                "subSector": "WATR-DW",
                "equipment": [{
                    "type": "Lime Silo",
                    "category": "static",
                    "tags": ["TANK"],
                    "description": "Lime Silo fixture."
                }]
            })
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let raw = json!({
            "sector": "WATR",
            "subSector": "WATR-DW",
            "equipment": [],
            "extra": true
        });
        assert!(serde_json::from_value::<Registry>(raw).is_err());
    }
}
