use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::object::RepoObject;

/// One auxiliary feed item element: a key, a value, and an attribute mapping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RssElement {
    pub key: String,
    pub value: String,
    pub attributes: BTreeMap<String, String>,
}

impl RssElement {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Fields of a single feed item as exchanged with contributors.
///
/// The host seeds defaults via [`RssItem::for_object`]; contributors may
/// overwrite any field but must keep the minimum shape checked by
/// [`RssItem::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Ordered auxiliary elements; the first one, when present, is the
    /// `source` element carrying the object link as a `url` attribute
    pub elements: Vec<RssElement>,
}

impl RssItem {
    /// Host-seeded defaults for one bookmarked object
    pub fn for_object(object: &RepoObject, base_url: &str) -> Self {
        let link = format!("{}/object/{}", base_url.trim_end_matches('/'), object.id);
        Self {
            title: object.display_text().to_string(),
            link: link.clone(),
            description: format!("Bookmarked repository object {}", object.id),
            elements: vec![
                RssElement::new("source", object.display_text()).with_attribute("url", link)
            ],
        }
    }

    /// Check the minimum shape required of every altered item. Returns a
    /// human-readable reason on failure.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.title.is_empty() {
            return Err("empty title".to_string());
        }
        if self.link.is_empty() {
            return Err("empty link".to_string());
        }
        if self.description.is_empty() {
            return Err("empty description".to_string());
        }
        if let Some(first) = self.elements.first() {
            if first.key != "source" {
                return Err(format!(
                    "first auxiliary element must be 'source', got '{}'",
                    first.key
                ));
            }
            if !first.attributes.contains_key("url") {
                return Err("'source' element is missing its 'url' attribute".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_source_url() {
        let object = RepoObject::new("islandora:12").with_label("Letters");
        let item = RssItem::for_object(&object, "https://repo.example.org/");

        assert_eq!(item.title, "Letters");
        assert_eq!(item.link, "https://repo.example.org/object/islandora:12");
        assert!(!item.description.is_empty());

        let source = &item.elements[0];
        assert_eq!(source.key, "source");
        assert_eq!(
            source.attributes.get("url").map(String::as_str),
            Some("https://repo.example.org/object/islandora:12")
        );
    }

    #[test]
    fn test_defaults_pass_validation() {
        let object = RepoObject::new("islandora:12");
        assert!(RssItem::for_object(&object, "http://localhost").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let object = RepoObject::new("islandora:12");
        let mut item = RssItem::for_object(&object, "http://localhost");
        item.title.clear();
        assert_eq!(item.validate(), Err("empty title".to_string()));
    }

    #[test]
    fn test_validate_rejects_wrong_first_element() {
        let object = RepoObject::new("islandora:12");
        let mut item = RssItem::for_object(&object, "http://localhost");
        item.elements[0].key = "enclosure".to_string();
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_url_attribute() {
        let object = RepoObject::new("islandora:12");
        let mut item = RssItem::for_object(&object, "http://localhost");
        item.elements[0].attributes.clear();
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_empty_elements_is_valid() {
        let object = RepoObject::new("islandora:12");
        let mut item = RssItem::for_object(&object, "http://localhost");
        item.elements.clear();
        assert!(item.validate().is_ok());
    }
}
