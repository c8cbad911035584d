//! Index-based editing of dynamic list fields

/// Operations on an ordered list of string entries.
///
/// Entries are addressed by position: removing an entry shifts every later
/// entry down by one. Out-of-range indices are ignored.
pub trait DynamicList {
    fn append_entry(&mut self);
    fn update_entry(&mut self, index: usize, value: String);
    fn remove_entry(&mut self, index: usize);
    fn entry_mut(&mut self, index: usize) -> Option<&mut String>;
}

impl DynamicList for Vec<String> {
    fn append_entry(&mut self) {
        self.push(String::new());
    }

    fn update_entry(&mut self, index: usize, value: String) {
        if let Some(entry) = self.get_mut(index) {
            *entry = value;
        }
    }

    fn remove_entry(&mut self, index: usize) {
        if index < self.len() {
            self.remove(index);
        }
    }

    fn entry_mut(&mut self, index: usize) -> Option<&mut String> {
        self.get_mut(index)
    }
}

/// Placeholder shown for a list with no entries
pub const EMPTY_LIST_PLACEHOLDER: &str =
    "Aucun élément ajouté. Appuyez sur Ctrl+A pour ajouter.";
