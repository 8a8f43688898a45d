use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::error::LookupError;

/// Placeholder shown for any display field the compound does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Top level of a PUG REST `compound/name/{name}/JSON` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PugResponse {
    #[serde(rename = "PC_Compounds", default)]
    pub compounds: Vec<CompoundRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundRecord {
    pub id: CompoundId,
    #[serde(default)]
    pub props: Vec<PropertyEntry>,
}

impl CompoundRecord {
    pub fn cid(&self) -> u64 {
        self.id.id.cid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundId {
    pub id: Cid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cid {
    pub cid: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub urn: PropertyUrn,
    pub value: PropertyValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyUrn {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ival: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fval: Option<f64>,
}

impl PropertyValue {
    /// Scalar as display text. Empty strings count as missing.
    pub fn text(&self) -> Option<String> {
        if let Some(sval) = self.sval.as_deref().filter(|s| !s.is_empty()) {
            return Some(sval.to_string());
        }
        self.ival
            .map(|i| i.to_string())
            .or_else(|| self.fval.map(|f| f.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayField {
    PreferredName,
    CasNumber,
    MolecularFormula,
    MolecularWeight,
    CanonicalSmiles,
}

impl DisplayField {
    /// Render order on the results panel.
    pub const ALL: [DisplayField; 5] = [
        DisplayField::PreferredName,
        DisplayField::CasNumber,
        DisplayField::MolecularFormula,
        DisplayField::MolecularWeight,
        DisplayField::CanonicalSmiles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisplayField::PreferredName => "Name",
            DisplayField::CasNumber => "CAS Number",
            DisplayField::MolecularFormula => "Molecular Formula",
            DisplayField::MolecularWeight => "Molecular Weight",
            DisplayField::CanonicalSmiles => "SMILES (Canonical)",
        }
    }

    /// Whether `entry` is the source of this field.
    pub fn matches(&self, entry: &PropertyEntry) -> bool {
        let label = entry.urn.label.as_str();
        let name = entry.urn.name.as_deref();
        match self {
            DisplayField::PreferredName => label == "IUPAC Name" && name == Some("Preferred"),
            DisplayField::CasNumber => {
                label == "Other Identifiers"
                    && entry
                        .value
                        .sval
                        .as_deref()
                        .is_some_and(|sval| sval.contains("CAS"))
            }
            DisplayField::MolecularFormula => label == "Molecular Formula",
            DisplayField::MolecularWeight => label == "Molecular Weight",
            DisplayField::CanonicalSmiles => label == "SMILES" && name == Some("Canonical"),
        }
    }
}

/// Display values keyed by field. A field with no entry, or whose first
/// matching entry carries no value, reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFields {
    values: BTreeMap<DisplayField, Option<String>>,
}

impl DisplayFields {
    pub fn new(values: BTreeMap<DisplayField, Option<String>>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: DisplayField) -> Option<&str> {
        self.values.get(&field).and_then(|v| v.as_deref())
    }

    pub fn get_or_na(&self, field: DisplayField) -> &str {
        self.get(field).unwrap_or(NOT_AVAILABLE)
    }
}

#[derive(Debug, Clone)]
pub struct FoundCompound {
    pub record: CompoundRecord,
    pub cas_number: Option<String>,
    pub fields: DisplayFields,
    pub image_url: String,
}

#[derive(Debug)]
pub enum SearchOutcome {
    Found(Box<FoundCompound>),
    Failed(LookupError),
}

/// Everything the search page needs: the trimmed query for the form and,
/// when a search ran, its outcome. `outcome == None` is the idle page.
#[derive(Debug, Default)]
pub struct SearchPage {
    pub query: String,
    pub outcome: Option<SearchOutcome>,
}

impl SearchPage {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.outcome.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_compound_schema() {
        let json = serde_json::json!({
            "PC_Compounds": [{
                "id": {"id": {"cid": 6549}},
                "props": [
                    {"urn": {"label": "Molecular Formula", "datatype": 1}, "value": {"sval": "C10H18O"}},
                    {"urn": {"label": "Log P", "name": "XLogP3"}, "value": {"fval": 2.7}},
                    {"urn": {"label": "Compound Complexity"}, "value": {"ival": 154}}
                ]
            }]
        });

        let response: PugResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.compounds.len(), 1);

        let compound = &response.compounds[0];
        assert_eq!(compound.cid(), 6549);
        assert_eq!(compound.props[0].value.text().as_deref(), Some("C10H18O"));
        assert_eq!(compound.props[1].urn.name.as_deref(), Some("XLogP3"));
        assert_eq!(compound.props[1].value.text().as_deref(), Some("2.7"));
        assert_eq!(compound.props[2].value.text().as_deref(), Some("154"));
    }

    #[test]
    fn test_missing_compound_list_defaults_to_empty() {
        let response: PugResponse = serde_json::from_str("{}").unwrap();
        assert!(response.compounds.is_empty());
    }

    #[test]
    fn test_missing_cid_is_a_schema_error() {
        let json = r#"{"PC_Compounds": [{"props": []}]}"#;
        assert!(serde_json::from_str::<PugResponse>(json).is_err());
    }

    #[test]
    fn test_empty_sval_reads_as_missing() {
        let value = PropertyValue {
            sval: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(value.text(), None);
    }

    #[test]
    fn test_display_fields_default_to_na() {
        let fields = DisplayFields::default();
        for field in DisplayField::ALL {
            assert_eq!(fields.get_or_na(field), NOT_AVAILABLE);
        }
    }
}
