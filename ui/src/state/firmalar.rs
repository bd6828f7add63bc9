//! Firma-list state for the dashboard.

#[cfg(test)]
#[path = "firmalar_test.rs"]
mod firmalar_test;

use std::cmp::Ordering;

use finansrisk::firma::Firma;

#[derive(Clone, Debug, Default)]
pub struct FirmalarState {
    pub items: Vec<Firma>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FirmalarState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the list with the server's answer, keeping the server's order.
    pub fn finish_load(&mut self, items: Vec<Firma>) {
        self.items = items;
        self.loading = false;
    }

    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Add a newly created firma and re-sort the list by name.
    pub fn insert_sorted(&mut self, firma: Firma) {
        self.items.insert(0, firma);
        self.items.sort_by(|a, b| compare_names(&a.adi, &b.adi));
    }

    /// Drop the firma with `id`; unknown ids are ignored.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|f| f.id != id);
    }
}

/// Case-insensitive name order with a case-sensitive tiebreak.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Prompt shown before deleting `firma`.
pub fn delete_confirm_message(firma: &Firma) -> String {
    format!("Delete '{}' (ID: {})? This cannot be undone.", firma.adi, firma.id)
}
