//! Bounded multi-select used for languages and apps.

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered, de-duplicated list of at most [`Selection::MAX`] names.
///
/// The cap holds for every way a selection can be built, including
/// deserialization of stored data (extra entries are dropped).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Selection(Vec<String>);

impl Selection {
    /// Maximum number of entries
    pub const MAX: usize = 4;

    /// Build from any names, keeping the first `MAX` distinct ones
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for name in names {
            selection.insert(name.into());
        }
        selection
    }

    /// Add `name` if it is absent and there is room.
    ///
    /// Returns `false` when the selection was left unchanged.
    pub fn insert(&mut self, name: String) -> bool {
        if self.is_full() || self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Remove `name`; always succeeds if present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|n| n != name);
        self.0.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= Self::MAX
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(Self::from_names(names.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_respects_cap() {
        let mut s = Selection::from_names(["Go", "Rust", "C++", "Java"]);
        assert!(s.is_full());
        assert!(!s.insert("Python".to_string()));
        assert_eq!(s.len(), 4);
        assert!(!s.contains("Python"));
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut s = Selection::from_names(["Go"]);
        assert!(!s.insert("Go".to_string()));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_remove_when_full() {
        let mut s = Selection::from_names(["Go", "Rust", "C++", "Java"]);
        assert!(s.remove("Rust"));
        assert_eq!(s.as_slice(), &["Go", "C++", "Java"]);
        assert!(!s.remove("Rust"));
    }

    #[test]
    fn test_deserialize_truncates_and_dedups() {
        let s: Selection =
            serde_json::from_str(r#"["Go","Go","Rust","PHP","Ruby","Swift"]"#).unwrap();
        assert_eq!(s.as_slice(), &["Go", "Rust", "PHP", "Ruby"]);
    }

    #[test]
    fn test_deserialize_null_is_empty() {
        let s: Selection = serde_json::from_str("null").unwrap();
        assert!(s.is_empty());
    }
}
