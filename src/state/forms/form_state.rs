//! Form state: entered values keyed by field name

use super::dynamic_list::DynamicList;
use super::error::FormError;
use super::field::{FieldDescriptor, FieldKind, FieldValue};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Field name to value mapping, as submitted and as returned by extractors
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Date format accepted by date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single user edit on the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Char(char),
    Backspace,
    Newline,
    NextOption,
    PrevOption,
    Toggle,
    Clear,
    AppendEntry,
    RemoveEntry,
}

/// Values entered so far.
///
/// Keyed by field name rather than by template, so switching templates keeps
/// every value whose field name also exists in the new template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FieldMap,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Current value of a field, shaped for its kind
    pub fn value_of(&self, field: &FieldDescriptor) -> FieldValue {
        self.values
            .get(field.name)
            .map(|v| coerce(v.clone(), field.kind))
            .unwrap_or_else(|| field.kind.empty_value())
    }

    /// Mutable value of a field, created empty (or reshaped) for its kind
    pub fn value_mut(&mut self, field: &FieldDescriptor) -> &mut FieldValue {
        let value = self
            .values
            .entry(field.name.to_string())
            .or_insert_with(|| field.kind.empty_value());
        if !matches_kind(value, field.kind) {
            *value = coerce(std::mem::take(value), field.kind);
        }
        value
    }

    /// Merge extracted values in; extracted values win over existing ones
    pub fn merge(&mut self, extracted: FieldMap) {
        self.values.extend(extracted);
    }

    /// Whether the field's visibility rule currently holds.
    ///
    /// The controlling field is read through its descriptor in `scope`, so a
    /// stored value is judged the same way it is displayed and submitted.
    pub fn is_visible(&self, field: &FieldDescriptor, scope: &[&FieldDescriptor]) -> bool {
        let Some(cond) = field.conditional else {
            return true;
        };
        let current = match scope.iter().find(|f| f.name == cond.field) {
            Some(controller) => Some(self.value_of(controller)),
            None => self.values.get(cond.field).cloned(),
        };
        let key = current.map(|v| v.condition_key()).unwrap_or_default();
        cond.values.contains(&key.as_str())
    }

    /// Fields to display, in template order
    pub fn visible<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a FieldDescriptor>,
    ) -> Vec<&'a FieldDescriptor> {
        let scope: Vec<&'a FieldDescriptor> = fields.into_iter().collect();
        scope
            .iter()
            .copied()
            .filter(|f| self.is_visible(f, &scope))
            .collect()
    }

    /// Check required and typed fields among the visible ones
    pub fn validate<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a FieldDescriptor>,
    ) -> Result<(), FormError> {
        let mut missing = Vec::new();
        for field in self.visible(fields) {
            let value = self.value_of(field);
            if value.is_blank() {
                if field.required {
                    missing.push(field.label.to_string());
                }
                continue;
            }
            let text = value.as_text().trim();
            match field.kind {
                FieldKind::Number if !is_non_negative_integer(text) => {
                    return Err(FormError::InvalidNumber {
                        field: field.label.to_string(),
                        value: text.to_string(),
                    });
                }
                FieldKind::Date if NaiveDate::parse_from_str(text, DATE_FORMAT).is_err() => {
                    return Err(FormError::InvalidDate {
                        field: field.label.to_string(),
                        value: text.to_string(),
                    });
                }
                FieldKind::Select if !field.options.contains(&text) => {
                    return Err(FormError::InvalidOption {
                        field: field.label.to_string(),
                        value: text.to_string(),
                    });
                }
                _ => {}
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingRequired(missing))
        }
    }

    /// Values of the visible fields, hidden conditional fields left out
    pub fn payload<'a>(&self, fields: impl IntoIterator<Item = &'a FieldDescriptor>) -> FieldMap {
        self.visible(fields)
            .into_iter()
            .map(|f| (f.name.to_string(), self.value_of(f)))
            .collect()
    }

    /// Apply one edit to a field; `entry` addresses the list entry for lists
    pub fn apply(&mut self, field: &FieldDescriptor, edit: FieldEdit, entry: usize) {
        let value = self.value_mut(field);
        match (field.kind, edit) {
            (FieldKind::Toggle, FieldEdit::Toggle | FieldEdit::Char(' ')) => {
                *value = FieldValue::Bool(!value.as_bool());
            }
            (FieldKind::Toggle, _) => {}
            (FieldKind::Select, FieldEdit::NextOption | FieldEdit::PrevOption) => {
                let forward = edit == FieldEdit::NextOption;
                *value = FieldValue::Text(cycle_option(field.options, value.as_text(), forward));
            }
            (FieldKind::Select, FieldEdit::Backspace | FieldEdit::Clear) => {
                *value = FieldValue::Text(String::new());
            }
            (FieldKind::Select, _) => {}
            (FieldKind::DynamicList, _) => {
                if let FieldValue::List(items) = value {
                    match edit {
                        FieldEdit::AppendEntry => items.append_entry(),
                        FieldEdit::RemoveEntry => items.remove_entry(entry),
                        FieldEdit::Clear => items.clear(),
                        FieldEdit::Char(c) => {
                            if let Some(item) = items.entry_mut(entry) {
                                item.push(c);
                            }
                        }
                        FieldEdit::Backspace => {
                            if let Some(item) = items.entry_mut(entry) {
                                item.pop();
                            }
                        }
                        _ => {}
                    }
                }
            }
            (FieldKind::Number, FieldEdit::Char(c)) if !c.is_ascii_digit() => {}
            (FieldKind::Textarea, FieldEdit::Newline) => value.push_char('\n'),
            (_, FieldEdit::Char(c)) => value.push_char(c),
            (_, FieldEdit::Backspace) => value.pop_char(),
            (_, FieldEdit::Clear) => *value = field.kind.empty_value(),
            _ => {}
        }
    }
}

fn matches_kind(value: &FieldValue, kind: FieldKind) -> bool {
    matches!(
        (value, kind),
        (FieldValue::List(_), FieldKind::DynamicList)
            | (FieldValue::Bool(_), FieldKind::Toggle)
            | (FieldValue::File(_), FieldKind::File)
            | (
                FieldValue::Text(_),
                FieldKind::Text
                    | FieldKind::Textarea
                    | FieldKind::Select
                    | FieldKind::Date
                    | FieldKind::Number
            )
    )
}

/// Reshape a value (typically an extracted one) to the kind of its field
fn coerce(value: FieldValue, kind: FieldKind) -> FieldValue {
    if matches_kind(&value, kind) {
        return value;
    }
    match kind {
        FieldKind::DynamicList => FieldValue::List(match value {
            FieldValue::Text(s) => s
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            other => vec![other.display_value()],
        }),
        FieldKind::Toggle => FieldValue::Bool(matches!(
            value.condition_key().trim().to_lowercase().as_str(),
            "true" | "oui" | "1"
        )),
        FieldKind::File => {
            let raw = value.condition_key();
            FieldValue::File((!raw.is_empty()).then(|| raw.into()))
        }
        _ => match value {
            FieldValue::Bool(b) => FieldValue::Text(b.to_string()),
            other => FieldValue::Text(other.display_value()),
        },
    }
}

fn is_non_negative_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn cycle_option(options: &[&str], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return String::new();
    }
    let next = match options.iter().position(|o| *o == current) {
        None if forward => 0,
        None => options.len() - 1,
        Some(i) if forward => (i + 1) % options.len(),
        Some(0) => options.len() - 1,
        Some(i) => i - 1,
    };
    options[next].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REASON: FieldDescriptor =
        FieldDescriptor::select("reason", "Motif", &["Nouveau", "Modifier", "Abroger"]).required();
    const OLD_REF: FieldDescriptor = FieldDescriptor::text("oldDecreeRef", "Ancien décret")
        .shown_when("reason", &["Modifier", "Abroger"]);
    const TITLE: FieldDescriptor = FieldDescriptor::text("title", "Titre").required();
    const CHAPTERS: FieldDescriptor = FieldDescriptor::list("chapters", "Chapitre").required();
    const PAGE: FieldDescriptor = FieldDescriptor::number("pageNumber", "N° de Page");
    const DATE: FieldDescriptor = FieldDescriptor::date("journalDate", "Date du Journal");
    const APPEAL: FieldDescriptor = FieldDescriptor::toggle("hasAppeal", "Recours");
    const APPEAL_FEES: FieldDescriptor =
        FieldDescriptor::text("appealFees", "Les frais").shown_when("hasAppeal", &["true"]);

    const FIELDS: &[FieldDescriptor] = &[TITLE, REASON, OLD_REF, CHAPTERS, PAGE, DATE];

    mod visibility {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_conditional_hidden_without_controlling_value() {
            let state = FormState::new();
            assert!(!state.is_visible(&OLD_REF, &[&REASON]));
        }

        #[test]
        fn test_conditional_hidden_for_value_outside_set() {
            let mut state = FormState::new();
            state.set("reason", "Nouveau");
            let names: Vec<_> = state.visible(FIELDS).iter().map(|f| f.name).collect();
            assert!(!names.contains(&"oldDecreeRef"));
        }

        #[test]
        fn test_conditional_shown_for_value_in_set() {
            let mut state = FormState::new();
            state.set("reason", "Abroger");
            let names: Vec<_> = state.visible(FIELDS).iter().map(|f| f.name).collect();
            assert_eq!(
                names,
                vec!["title", "reason", "oldDecreeRef", "chapters", "pageNumber", "journalDate"]
            );
        }

        #[test]
        fn test_toggle_controls_visibility() {
            let mut state = FormState::new();
            let scope = [&APPEAL, &APPEAL_FEES];
            assert!(!state.is_visible(&APPEAL_FEES, &scope));
            state.apply(&APPEAL, FieldEdit::Toggle, 0);
            assert!(state.is_visible(&APPEAL_FEES, &scope));
            state.apply(&APPEAL, FieldEdit::Char(' '), 0);
            assert!(!state.is_visible(&APPEAL_FEES, &scope));
        }

        #[test]
        fn test_extracted_text_toggle_reveals_dependents() {
            let mut state = FormState::new();
            let mut extracted = FieldMap::new();
            extracted.insert("hasAppeal".into(), FieldValue::from("oui"));
            extracted.insert("appealFees".into(), FieldValue::from("500 DA"));
            state.merge(extracted);

            assert_eq!(state.value_of(&APPEAL), FieldValue::Bool(true));
            let fields = [APPEAL, APPEAL_FEES];
            let names: Vec<_> = state.visible(&fields).iter().map(|f| f.name).collect();
            assert_eq!(names, vec!["hasAppeal", "appealFees"]);

            let payload = state.payload(&fields);
            assert_eq!(payload.get("hasAppeal"), Some(&FieldValue::Bool(true)));
            assert_eq!(payload.get("appealFees"), Some(&FieldValue::from("500 DA")));
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        fn filled() -> FormState {
            let mut state = FormState::new();
            state.set("title", "Loi de finances");
            state.set("reason", "Nouveau");
            state.set("chapters", vec!["Chapitre I".to_string()]);
            state
        }

        #[test]
        fn test_complete_form_passes() {
            assert_eq!(filled().validate(FIELDS), Ok(()));
        }

        #[test]
        fn test_empty_form_lists_every_required_label() {
            let err = FormState::new().validate(FIELDS).unwrap_err();
            assert_eq!(
                err,
                FormError::MissingRequired(vec![
                    "Titre".to_string(),
                    "Motif".to_string(),
                    "Chapitre".to_string()
                ])
            );
        }

        #[test]
        fn test_empty_list_is_missing() {
            let mut state = filled();
            state.set("chapters", Vec::<String>::new());
            assert_eq!(
                state.validate(FIELDS),
                Err(FormError::MissingRequired(vec!["Chapitre".to_string()]))
            );
        }

        #[test]
        fn test_invalid_number_rejected() {
            let mut state = filled();
            state.set("pageNumber", "douze");
            assert!(matches!(
                state.validate(FIELDS),
                Err(FormError::InvalidNumber { .. })
            ));
        }

        #[test]
        fn test_large_and_negative_numbers() {
            let mut state = filled();
            state.set("pageNumber", "12345678901234567890123");
            assert_eq!(state.validate(FIELDS), Ok(()));
            state.set("pageNumber", "-4");
            assert!(matches!(
                state.validate(FIELDS),
                Err(FormError::InvalidNumber { .. })
            ));
        }

        #[test]
        fn test_invalid_date_rejected() {
            let mut state = filled();
            state.set("journalDate", "12/03/2020");
            assert!(matches!(
                state.validate(FIELDS),
                Err(FormError::InvalidDate { .. })
            ));
            state.set("journalDate", "2020-03-12");
            assert_eq!(state.validate(FIELDS), Ok(()));
        }

        #[test]
        fn test_unknown_option_rejected() {
            let mut state = filled();
            state.set("reason", "Suspendre");
            assert!(matches!(
                state.validate(FIELDS),
                Err(FormError::InvalidOption { .. })
            ));
        }

        #[test]
        fn test_hidden_required_field_not_checked() {
            const HIDDEN_REQUIRED: FieldDescriptor = FieldDescriptor::text("x", "X")
                .required()
                .shown_when("reason", &["Modifier"]);
            let state = filled();
            assert_eq!(state.validate(&[HIDDEN_REQUIRED]), Ok(()));
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_payload_omits_hidden_fields() {
            let mut state = FormState::new();
            state.set("reason", "Modifier");
            state.set("oldDecreeRef", "D-12");
            state.set("reason", "Nouveau");
            let payload = state.payload(FIELDS);
            assert!(!payload.contains_key("oldDecreeRef"));
            assert_eq!(payload.get("reason"), Some(&FieldValue::from("Nouveau")));
        }

        #[test]
        fn test_payload_fills_untouched_fields_with_empty_values() {
            let payload = FormState::new().payload(FIELDS);
            assert_eq!(payload.get("chapters"), Some(&FieldValue::List(vec![])));
            assert_eq!(payload.get("title"), Some(&FieldValue::from("")));
        }

        #[test]
        fn test_payload_reshapes_extracted_text_into_list() {
            let mut state = FormState::new();
            state.set("chapters", "Chapitre I\n\nChapitre II");
            assert_eq!(
                state.payload(FIELDS).get("chapters"),
                Some(&FieldValue::List(vec![
                    "Chapitre I".to_string(),
                    "Chapitre II".to_string()
                ]))
            );
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_into_text_field() {
            let mut state = FormState::new();
            for c in "Loi".chars() {
                state.apply(&TITLE, FieldEdit::Char(c), 0);
            }
            state.apply(&TITLE, FieldEdit::Backspace, 0);
            assert_eq!(state.get("title"), Some(&FieldValue::from("Lo")));
        }

        #[test]
        fn test_number_field_ignores_letters() {
            let mut state = FormState::new();
            state.apply(&PAGE, FieldEdit::Char('1'), 0);
            state.apply(&PAGE, FieldEdit::Char('a'), 0);
            state.apply(&PAGE, FieldEdit::Char('2'), 0);
            assert_eq!(state.get("pageNumber"), Some(&FieldValue::from("12")));
        }

        #[test]
        fn test_select_cycles_forward_and_back() {
            let mut state = FormState::new();
            state.apply(&REASON, FieldEdit::NextOption, 0);
            assert_eq!(state.value_of(&REASON).as_text(), "Nouveau");
            state.apply(&REASON, FieldEdit::PrevOption, 0);
            assert_eq!(state.value_of(&REASON).as_text(), "Abroger");
            state.apply(&REASON, FieldEdit::NextOption, 0);
            assert_eq!(state.value_of(&REASON).as_text(), "Nouveau");
            state.apply(&REASON, FieldEdit::Backspace, 0);
            assert_eq!(state.value_of(&REASON).as_text(), "");
        }

        #[test]
        fn test_select_ignores_typed_characters() {
            let mut state = FormState::new();
            state.apply(&REASON, FieldEdit::Char('x'), 0);
            assert_eq!(state.value_of(&REASON).as_text(), "");
        }

        #[test]
        fn test_list_entry_editing() {
            let mut state = FormState::new();
            state.apply(&CHAPTERS, FieldEdit::AppendEntry, 0);
            state.apply(&CHAPTERS, FieldEdit::AppendEntry, 0);
            state.apply(&CHAPTERS, FieldEdit::Char('b'), 1);
            state.apply(&CHAPTERS, FieldEdit::Char('a'), 0);
            assert_eq!(
                state.value_of(&CHAPTERS),
                FieldValue::List(vec!["a".to_string(), "b".to_string()])
            );
            state.apply(&CHAPTERS, FieldEdit::RemoveEntry, 0);
            assert_eq!(
                state.value_of(&CHAPTERS),
                FieldValue::List(vec!["b".to_string()])
            );
        }

        #[test]
        fn test_typing_into_empty_list_is_ignored() {
            let mut state = FormState::new();
            state.apply(&CHAPTERS, FieldEdit::Char('a'), 0);
            assert_eq!(state.value_of(&CHAPTERS), FieldValue::List(vec![]));
        }

        #[test]
        fn test_newline_only_in_textarea() {
            const BODY: FieldDescriptor = FieldDescriptor::textarea("subject", "Sujet");
            let mut state = FormState::new();
            state.apply(&BODY, FieldEdit::Newline, 0);
            state.apply(&TITLE, FieldEdit::Newline, 0);
            assert_eq!(state.value_of(&BODY).as_text(), "\n");
            assert_eq!(state.value_of(&TITLE).as_text(), "");
        }
    }

    #[test]
    fn test_merge_prefers_extracted_values() {
        let mut state = FormState::new();
        state.set("title", "Ancien");
        state.set("subject", "Conservé");
        let mut extracted = FieldMap::new();
        extracted.insert("title".into(), FieldValue::from("Nouveau"));
        state.merge(extracted);
        assert_eq!(state.get("title"), Some(&FieldValue::from("Nouveau")));
        assert_eq!(state.get("subject"), Some(&FieldValue::from("Conservé")));
    }
}
