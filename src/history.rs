// report-generation-service/src/history.rs

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const MAX_HISTORY_SIZE: usize = 5;

const MIN_CLIENT_NAME_LENGTH: usize = 2;

/// Recently used client names, most recent first. Serialises as a plain JSON
/// array of strings, the shape the report form keeps in browser storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientHistory {
    clients: Vec<String>,
}

impl ClientHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a stored history. Anything unreadable starts a fresh one.
    pub fn from_json(stored: &str) -> Self {
        match serde_json::from_str::<Self>(stored) {
            Ok(mut history) => {
                history.clients.truncate(MAX_HISTORY_SIZE);
                history
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable client history");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Moves `client_name` to the front, dropping any case-insensitive
    /// duplicate and the oldest entry past the size limit.
    pub fn record(&mut self, client_name: &str) {
        let trimmed = client_name.trim();
        if trimmed.chars().count() < MIN_CLIENT_NAME_LENGTH {
            return;
        }

        let key = trimmed.to_lowercase();
        self.clients.retain(|existing| existing.to_lowercase() != key);
        self.clients.insert(0, trimmed.to_string());
        self.clients.truncate(MAX_HISTORY_SIZE);
    }

    pub fn recent(&self) -> &[String] {
        &self.clients
    }

    pub fn filter(&self, query: &str) -> Vec<&str> {
        if query.trim().is_empty() {
            return self.clients.iter().map(String::as_str).collect();
        }

        let needle = query.to_lowercase();
        self.clients
            .iter()
            .filter(|client| client.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn clear(&mut self) {
        self.clients.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(names: &[&str]) -> ClientHistory {
        let mut history = ClientHistory::new();
        for name in names {
            history.record(name);
        }
        history
    }

    #[test]
    fn most_recent_client_comes_first() {
        let history = history_of(&["Acme", "Globex", "Initech"]);
        assert_eq!(history.recent(), ["Initech", "Globex", "Acme"]);
    }

    #[test]
    fn duplicates_are_matched_case_insensitively() {
        let history = history_of(&["Acme", "Globex", "ACME"]);
        assert_eq!(history.recent(), ["ACME", "Globex"]);
    }

    #[test]
    fn history_keeps_five_entries() {
        let history = history_of(&["c1", "c2", "c3", "c4", "c5", "c6"]);
        assert_eq!(history.recent().len(), MAX_HISTORY_SIZE);
        assert_eq!(history.recent()[0], "c6");
        assert!(!history.recent().iter().any(|c| c == "c1"));
    }

    #[test]
    fn short_names_are_not_recorded() {
        let history = history_of(&["", " ", " A "]);
        assert!(history.is_empty());
    }

    #[test]
    fn names_are_stored_trimmed() {
        let history = history_of(&["  Acme Corporation  "]);
        assert_eq!(history.recent(), ["Acme Corporation"]);
    }

    #[test]
    fn filter_matches_substrings_ignoring_case() {
        let history = history_of(&["Acme Corporation", "Globex", "acme labs"]);
        assert_eq!(history.filter("ACME"), vec!["acme labs", "Acme Corporation"]);
        assert_eq!(history.filter("   ").len(), 3);
        assert!(history.filter("umbrella").is_empty());
    }

    #[test]
    fn clear_empties_the_history() {
        let mut history = history_of(&["Acme", "Globex"]);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn stored_form_is_a_plain_array() {
        let history = history_of(&["Acme", "Globex"]);
        let json = history.to_json().unwrap();
        assert_eq!(json, r#"["Globex","Acme"]"#);
        assert_eq!(ClientHistory::from_json(&json), history);
    }

    #[test]
    fn unreadable_storage_starts_fresh() {
        assert!(ClientHistory::from_json("{oops").is_empty());
        assert!(ClientHistory::from_json(r#"{"a": 1}"#).is_empty());
    }
}
