use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current selection: category id -> option id.
///
/// An empty option id means "nothing selected" and is kept in the map, the
/// same shape the API and the embed script exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedConfig(BTreeMap<String, String>);

impl SelectedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected option for `category_id`, `None` when empty or absent
    pub fn get(&self, category_id: &str) -> Option<&str> {
        self.0
            .get(category_id)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn is_selected(&self, category_id: &str, option_id: &str) -> bool {
        !option_id.is_empty() && self.get(category_id) == Some(option_id)
    }

    pub fn set(&mut self, category_id: impl Into<String>, option_id: impl Into<String>) {
        self.0.insert(category_id.into(), option_id.into());
    }

    pub fn clear(&mut self, category_id: &str) {
        if let Some(slot) = self.0.get_mut(category_id) {
            slot.clear();
        }
    }

    pub fn remove(&mut self, category_id: &str) {
        self.0.remove(category_id);
    }

    /// Non-empty selections only
    pub fn iter_selected(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, option_id)| !option_id.is_empty())
            .map(|(category_id, option_id)| (category_id.as_str(), option_id.as_str()))
    }

    pub fn selected_count(&self) -> usize {
        self.iter_selected().count()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl From<BTreeMap<String, String>> for SelectedConfig {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectedConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_means_none() {
        let mut selected = SelectedConfig::new();
        selected.set("color", "");
        selected.set("finish", "matte");
        assert_eq!(selected.get("color"), None);
        assert_eq!(selected.get("finish"), Some("matte"));
        assert_eq!(selected.selected_count(), 1);
    }

    #[test]
    fn test_clear_keeps_key() {
        let mut selected: SelectedConfig = [("color", "red")].into_iter().collect();
        selected.clear("color");
        assert_eq!(selected.get("color"), None);
        assert!(selected.as_map().contains_key("color"));

        selected.remove("color");
        assert!(!selected.as_map().contains_key("color"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let selected: SelectedConfig = [("color", "red"), ("size", "")].into_iter().collect();
        let json = serde_json::to_string(&selected).unwrap();
        assert_eq!(json, r#"{"color":"red","size":""}"#);
    }
}
