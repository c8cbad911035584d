//! Form field value objects and field descriptors

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Widget kind of a templated field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Textarea,
    Select,
    Date,
    File,
    DynamicList,
    Number,
    Toggle,
}

impl FieldKind {
    /// Value a fresh field of this kind starts with
    pub fn empty_value(self) -> FieldValue {
        match self {
            FieldKind::DynamicList => FieldValue::List(Vec::new()),
            FieldKind::Toggle => FieldValue::Bool(false),
            FieldKind::File => FieldValue::File(None),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::Textarea | FieldKind::DynamicList)
    }
}

/// Visibility rule: the field is shown only while `field` holds one of `values`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditional {
    pub field: &'static str,
    pub values: &'static [&'static str],
}

/// Static description of one templated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [&'static str],
    pub placeholder: Option<&'static str>,
    pub conditional: Option<Conditional>,
}

impl FieldDescriptor {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            options: &[],
            placeholder: None,
            conditional: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn file(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::File)
    }

    pub const fn list(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::DynamicList)
    }

    pub const fn toggle(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Toggle)
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::Select);
        field.options = options;
        field
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn shown_when(
        mut self,
        field: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        self.conditional = Some(Conditional { field, values });
        self
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Bool(bool),
    File(Option<PathBuf>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::List(items) => items,
            _ => &[],
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    /// Key used to evaluate visibility rules against this value
    pub fn condition_key(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::List(items) => items.join(","),
            FieldValue::File(path) => path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// True when the value would not satisfy a required field
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|i| i.trim().is_empty()),
            FieldValue::Bool(_) => false,
            FieldValue::File(path) => path.is_none(),
        }
    }

    /// Push a character to a text or file-path value
    pub fn push_char(&mut self, c: char) {
        match self {
            FieldValue::Text(s) => s.push(c),
            FieldValue::File(path) => {
                let mut raw = path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                raw.push(c);
                *path = Some(PathBuf::from(raw));
            }
            FieldValue::List(_) | FieldValue::Bool(_) => {}
        }
    }

    /// Remove the last character from a text or file-path value
    pub fn pop_char(&mut self) {
        match self {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::File(path) => {
                let mut raw = path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                raw.pop();
                *path = if raw.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(raw))
                };
            }
            FieldValue::List(_) | FieldValue::Bool(_) => {}
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join("\n"),
            FieldValue::Bool(true) => "Oui".to_string(),
            FieldValue::Bool(false) => "Non".to_string(),
            FieldValue::File(Some(path)) => path.display().to_string(),
            FieldValue::File(None) => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_matches_kind() {
        assert_eq!(FieldKind::DynamicList.empty_value(), FieldValue::List(vec![]));
        assert_eq!(FieldKind::Toggle.empty_value(), FieldValue::Bool(false));
        assert_eq!(FieldKind::File.empty_value(), FieldValue::File(None));
        assert_eq!(FieldKind::Date.empty_value(), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_builder_sets_flags() {
        const FIELD: FieldDescriptor = FieldDescriptor::select("reason", "Motif", &["Nouveau"])
            .required()
            .placeholder("Choisir");
        assert!(FIELD.required);
        assert_eq!(FIELD.options, &["Nouveau"]);
        assert_eq!(FIELD.placeholder, Some("Choisir"));
        assert!(FIELD.conditional.is_none());
    }

    #[test]
    fn test_condition_key_for_bool() {
        assert_eq!(FieldValue::Bool(true).condition_key(), "true");
        assert_eq!(FieldValue::Bool(false).condition_key(), "false");
    }

    #[test]
    fn test_blank_list_ignores_whitespace_entries() {
        let value = FieldValue::List(vec!["  ".to_string(), String::new()]);
        assert!(value.is_blank());
        let value = FieldValue::List(vec!["Article 1".to_string()]);
        assert!(!value.is_blank());
    }

    #[test]
    fn test_toggle_is_never_blank() {
        assert!(!FieldValue::Bool(false).is_blank());
    }

    #[test]
    fn test_file_path_editing() {
        let mut value = FieldValue::File(None);
        value.push_char('a');
        value.push_char('.');
        assert_eq!(value.display_value(), "a.");
        value.pop_char();
        value.pop_char();
        assert_eq!(value, FieldValue::File(None));
    }

    #[test]
    fn test_push_char_ignored_for_list() {
        let mut value = FieldValue::List(vec![]);
        value.push_char('x');
        assert_eq!(value, FieldValue::List(vec![]));
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_string(&FieldValue::List(vec!["a".into()])).unwrap();
        assert_eq!(json, r#"["a"]"#);
        let json = serde_json::to_string(&FieldValue::Bool(true)).unwrap();
        assert_eq!(json, "true");
    }
}
