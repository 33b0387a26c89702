use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A reference to a repository object as seen by contributors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoObject {
    /// Raw repository identifier, e.g. "islandora:99"
    pub id: String,
    /// Human-readable label; may be absent or empty
    pub label: Option<String>,
    /// Content-model identifier used to select model-specific markup
    pub content_model: Option<String>,
}

impl RepoObject {
    /// Create an object reference with just an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            content_model: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_content_model(mut self, model: impl Into<String>) -> Self {
        self.content_model = Some(model.into());
        self
    }

    /// Display text: the label when present and non-empty, the raw
    /// identifier otherwise.
    pub fn display_text(&self) -> &str {
        match &self.label {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }
}

/// Link parameters for rendering one object: visible markup, target path,
/// and query parameters.
///
/// Query parameters are kept in a `BTreeMap` so that renders of identical
/// input are byte-identical.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectUrlInfo {
    pub markup: String,
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl ObjectUrlInfo {
    pub fn new(markup: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}
