use crate::core::{DisplayField, DisplayFields, PropertyEntry};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// First entry that sources `field`, as text.
pub fn find_property(props: &[PropertyEntry], field: DisplayField) -> Option<String> {
    props
        .iter()
        .find(|entry| field.matches(entry))
        .and_then(|entry| entry.value.text())
}

pub fn extract_cas_number(props: &[PropertyEntry]) -> Option<String> {
    find_property(props, DisplayField::CasNumber)
}

/// Resolves every display field in one pass over `props`. The first matching
/// entry decides a field, even when its value turns out to be empty.
pub fn extract_display_fields(props: &[PropertyEntry]) -> DisplayFields {
    let mut values = BTreeMap::new();

    for entry in props {
        for field in DisplayField::ALL {
            if !field.matches(entry) {
                continue;
            }
            if let Entry::Vacant(slot) = values.entry(field) {
                slot.insert(entry.value.text());
            }
        }
        if values.len() == DisplayField::ALL.len() {
            break;
        }
    }

    tracing::debug!(
        "Extracted {} of {} display fields from {} properties",
        values.values().filter(|v| v.is_some()).count(),
        DisplayField::ALL.len(),
        props.len()
    );

    DisplayFields::new(values)
}
