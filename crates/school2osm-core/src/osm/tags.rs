use serde::Serialize;

/// Insertion-ordered tag collection with unique keys.
///
/// Re-inserting an existing key replaces its value in place, so the key keeps
/// the position of its first insertion. Values are stored as given; callers
/// omit tags that have no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagMap {
    entries: Vec<(String, String)>,
}

impl TagMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Moves every entry of `other` into `self`, in `other`'s order.
    pub fn extend(&mut self, other: TagMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for TagMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Self::new();
        for (key, value) in iter {
            tags.insert(key, value);
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_first_position_and_last_value() {
        let mut tags = TagMap::new();
        tags.insert("amenity", "school");
        tags.insert("name", "Galtvort");
        tags.insert("amenity", "college");

        let entries: Vec<_> = tags.iter().collect();
        assert_eq!(entries, vec![("amenity", "college"), ("name", "Galtvort")]);
    }

    #[test]
    fn extend_merges_in_order_with_overwrite() {
        let mut tags: TagMap = [("a", "1"), ("b", "2")].into_iter().collect();
        let other: TagMap = [("c", "3"), ("a", "4")].into_iter().collect();
        tags.extend(other);

        assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(tags.get("a"), Some("4"));
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn empty_values_are_kept_as_given() {
        let mut tags = TagMap::new();
        tags.insert("isced:level", "");
        assert!(tags.contains_key("isced:level"));
        assert_eq!(tags.get("isced:level"), Some(""));
    }
}
