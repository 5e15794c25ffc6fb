use serde::{Deserialize, Serialize};

use crate::address::AddressRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key:   String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key:   key.into(),
            value: value.into(),
        }
    }
}

/// Tags in the order the inventory reported them. Duplicate keys are kept.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tags(Vec<Tag>);

impl From<Option<Vec<Tag>>> for Tags {
    fn from(value: Option<Vec<Tag>>) -> Self {
        match value {
            Some(tags) => Tags(tags),
            None => Tags(Vec::new()),
        }
    }
}

impl Tags {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn with_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.0.iter().filter(move |t| t.key == key)
    }

    /// True only when exactly one tag carries `key` and its value is `value`.
    pub fn is_tagged(&self, key: &str, value: &str) -> bool {
        let mut matching = self.with_key(key);
        match (matching.next(), matching.next()) {
            (Some(tag), None) => tag.value == value,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    pub key:   String,
    pub value: String,
}

impl Default for TagFilter {
    fn default() -> Self {
        Self {
            key:   String::from("purpose"),
            value: String::from("minecraft"),
        }
    }
}

impl TagFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        TagFilter {
            key:   key.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &AddressRecord) -> bool {
        record.tags().is_tagged(&self.key, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_set(pairs: &[(&str, &str)]) -> Tags {
        Tags::from(Some(pairs.iter().map(|(k, v)| Tag::new(*k, *v)).collect()))
    }

    #[test]
    fn single_purpose_tag_matches() {
        let tags = tag_set(&[("Name", "mc-server"), ("purpose", "minecraft")]);
        assert!(tags.is_tagged("purpose", "minecraft"));
    }

    #[test]
    fn other_purpose_does_not_match() {
        assert!(!tag_set(&[("purpose", "web")]).is_tagged("purpose", "minecraft"));
    }

    #[test]
    fn value_match_is_case_sensitive() {
        assert!(!tag_set(&[("purpose", "Minecraft")]).is_tagged("purpose", "minecraft"));
        assert!(!tag_set(&[("Purpose", "minecraft")]).is_tagged("purpose", "minecraft"));
    }

    #[test]
    fn duplicate_purpose_tags_never_match() {
        let tags = tag_set(&[("purpose", "minecraft"), ("purpose", "web")]);
        assert!(!tags.is_tagged("purpose", "minecraft"));

        let tags = tag_set(&[("purpose", "minecraft"), ("purpose", "minecraft")]);
        assert!(!tags.is_tagged("purpose", "minecraft"));
    }

    #[test]
    fn missing_tags_never_match() {
        let tags = Tags::from(None);
        assert!(tags.is_empty());
        assert!(!tags.is_tagged("purpose", "minecraft"));
    }

    #[test]
    fn with_key_keeps_order() {
        let tags = tag_set(&[("a", "1"), ("purpose", "x"), ("b", "2"), ("purpose", "y")]);
        let values: Vec<&str> = tags.with_key("purpose").map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["x", "y"]);
        assert_eq!(tags.len(), 4);
    }

    #[test]
    fn default_filter_is_minecraft() {
        assert_eq!(TagFilter::default(), TagFilter::new("purpose", "minecraft"));
    }
}
