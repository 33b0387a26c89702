//! Core contributor traits and types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ObjectUrlInfo, RepoObject, RssItem};

/// Information about a contributor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorInfo {
    /// Unique name/identifier for the contributor
    pub name: String,
    /// Version string (semver recommended)
    pub version: String,
    /// Human-readable description
    pub description: String,
}

impl fmt::Display for ContributorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}

/// An export function the host invokes for a chosen provider
pub type ExportFn = Arc<dyn Fn(&[RepoObject]) -> Result<String> + Send + Sync>;

/// Provider-name to export-function mapping produced by enumeration.
/// Provider names must be unique across all contributors.
pub type ExportHandlers = HashMap<String, ExportFn>;

/// One style metadata record offered to the export pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportStyle {
    /// Option key, namespaced by contributor (e.g. "standard.compact")
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Host-specific style settings
    pub settings: HashMap<String, String>,
}

impl ExportStyle {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            settings: HashMap::new(),
        }
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

/// The extension surface a contributor can serve.
///
/// Every method has a default implementation so a contributor opts into only
/// the points it cares about. All methods are pure mappings over their
/// inputs; incidental side effects such as logging are not part of the
/// contract.
pub trait Contributor: Send + Sync {
    /// Returns information about the contributor
    fn info(&self) -> ContributorInfo;

    /// Enumerate export handlers (provider name to export function).
    /// Runs at pipeline start; a failing contributor is skipped.
    fn export_handlers(&self) -> Result<ExportHandlers> {
        Ok(ExportHandlers::new())
    }

    /// Fold-style alteration of the enumerated handler mapping.
    ///
    /// Receives the current mapping by value and returns the next one;
    /// entries may be removed, added, or replaced. Runs strictly after every
    /// contributor's `export_handlers` and before the host presents choices.
    /// Ordering across contributors is registration order, but should be
    /// treated as unspecified beyond "after all enumerations, before use".
    fn alter_export_handlers(&self, handlers: ExportHandlers) -> Result<ExportHandlers> {
        Ok(handlers)
    }

    /// Generic markup for one object. `None` means this contributor does
    /// not render this object.
    fn object_markup(&self, _object: &RepoObject, _url_info: &ObjectUrlInfo) -> Option<String> {
        None
    }

    /// Content-model-specific markup, preferred over `object_markup` when
    /// the object's content model matches. `None` means this contributor has
    /// no renderer for the given model.
    fn object_markup_for_model(
        &self,
        _model: &str,
        _object: &RepoObject,
        _url_info: &ObjectUrlInfo,
    ) -> Option<String> {
        None
    }

    /// Additional style records for the given export option. Purely
    /// additive; entries are namespaced by contributor.
    fn export_styles(&self, _option: &str) -> Result<Vec<ExportStyle>> {
        Ok(Vec::new())
    }

    /// Return the next version of a feed item for the bookmarked object.
    ///
    /// Receives the current item by value; the returned item must keep the
    /// minimum shape checked by [`RssItem::validate`].
    fn alter_rss_item(&self, _object: &RepoObject, item: RssItem) -> Result<RssItem> {
        Ok(item)
    }
}
