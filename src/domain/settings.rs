// Settings form serialization
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Checkbox,
}

/// A field of the settings form as declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: FieldKind,
}

fn default_kind() -> FieldKind {
    FieldKind::Text
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Current state of one input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormControl {
    Input { name: String, value: String },
    Checkbox { name: String, checked: bool },
}

impl FormControl {
    pub fn name(&self) -> &str {
        match self {
            FormControl::Input { name, .. } | FormControl::Checkbox { name, .. } => name,
        }
    }
}

/// Flatten named controls into the string map posted to `/api/settings`.
/// Checkboxes become the literal strings `"true"` / `"false"`.
pub fn serialize_form(controls: &[FormControl]) -> BTreeMap<String, String> {
    controls
        .iter()
        .filter(|c| !c.name().is_empty())
        .map(|c| match c {
            FormControl::Input { name, value } => (name.clone(), value.clone()),
            FormControl::Checkbox { name, checked } => (name.clone(), checked.to_string()),
        })
        .collect()
}

/// Rebuild control state from an urlencoded form post. Browsers leave out
/// unchecked checkboxes entirely, so presence in `posted` is what marks one
/// as checked.
pub fn controls_from_post(schema: &[FormField], posted: &HashMap<String, String>) -> Vec<FormControl> {
    schema
        .iter()
        .map(|field| match field.kind {
            FieldKind::Checkbox => FormControl::Checkbox {
                name: field.name.clone(),
                checked: posted.contains_key(&field.name),
            },
            FieldKind::Text => FormControl::Input {
                name: field.name.clone(),
                value: posted.get(&field.name).cloned().unwrap_or_default(),
            },
        })
        .collect()
}
