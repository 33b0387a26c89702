//! Ordered contributor registry and the host-facing dispatch pipeline

use log::{debug, error, info, warn};

use super::traits::{Contributor, ContributorInfo, ExportHandlers, ExportStyle};
use crate::config::Config;
use crate::error::{ListmarksError, Result};
use crate::models::{ObjectUrlInfo, RepoObject, RssItem};
use crate::render;

/// Holds contributors in registration order and runs the extension
/// pipelines on their behalf.
///
/// Per-contributor failures are isolated: a contributor returning an error
/// from an enumeration or alteration is logged and skipped, and never aborts
/// the pipeline. The one exception is a feed item that breaks the minimum
/// shape, which is surfaced as a descriptive contract violation.
pub struct Registry {
    /// All registered contributors, in registration order
    contributors: Vec<Box<dyn Contributor>>,
    /// Host configuration (disabled contributors, feed base URL)
    config: Config,
}

impl Registry {
    /// Create a registry with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a registry with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            contributors: Vec::new(),
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a contributor. Contributor names must be unique.
    pub fn register(&mut self, contributor: Box<dyn Contributor>) -> Result<()> {
        let info = contributor.info();
        info!("Registering contributor: {}", info);

        if self.contributors.iter().any(|c| c.info().name == info.name) {
            return Err(ListmarksError::Contributor(
                info.name.clone(),
                "already registered".to_string(),
            ));
        }

        self.contributors.push(contributor);
        debug!("Contributor '{}' registered successfully", info.name);
        Ok(())
    }

    /// Get list of all registered contributors
    pub fn list_contributors(&self) -> Vec<ContributorInfo> {
        self.contributors.iter().map(|c| c.info()).collect()
    }

    /// Contributors eligible for dispatch, in registration order
    fn active(&self) -> impl Iterator<Item = &dyn Contributor> + '_ {
        self.contributors
            .iter()
            .filter(|c| {
                let name = c.info().name;
                if self.config.is_disabled(&name) {
                    debug!("Contributor '{}' is disabled, skipping", name);
                    return false;
                }
                true
            })
            .map(|c| c.as_ref())
    }

    /// Enumerate export handlers from every contributor, then run the
    /// alteration fold.
    ///
    /// A contributor whose enumeration fails is skipped with a logged error.
    /// A provider name already taken keeps its first entry; the collision is
    /// logged as a configuration error for an administrator.
    pub fn export_handlers(&self) -> ExportHandlers {
        let mut handlers = ExportHandlers::new();

        for contributor in self.active() {
            let name = contributor.info().name;
            match contributor.export_handlers() {
                Ok(batch) => {
                    debug!(
                        "Contributor '{}' enumerated {} export handler(s)",
                        name,
                        batch.len()
                    );
                    for (provider, handler) in batch {
                        if handlers.contains_key(&provider) {
                            warn!(
                                "Export provider '{}' from contributor '{}' collides with an earlier entry, keeping the first",
                                provider, name
                            );
                            continue;
                        }
                        handlers.insert(provider, handler);
                    }
                }
                Err(e) => {
                    error!(
                        "Contributor '{}' export enumeration failed (skipped): {}",
                        name, e
                    );
                }
            }
        }

        // Alteration runs only after every enumeration has been collected.
        for contributor in self.active() {
            let name = contributor.info().name;
            match contributor.alter_export_handlers(handlers.clone()) {
                Ok(next) => handlers = next,
                Err(e) => {
                    error!(
                        "Contributor '{}' handler alteration failed (ignored): {}",
                        name, e
                    );
                }
            }
        }

        handlers
    }

    /// Markup for one object.
    ///
    /// Content-model-specific renderers win over generic ones; the default
    /// link template is the guaranteed fallback. An absent object renders
    /// nothing. The object is never mutated.
    pub fn object_markup(&self, object: Option<&RepoObject>, url_info: &ObjectUrlInfo) -> String {
        let object = match object {
            Some(object) => object,
            None => return String::new(),
        };

        if let Some(model) = object.content_model.as_deref() {
            for contributor in self.active() {
                if let Some(markup) = contributor.object_markup_for_model(model, object, url_info)
                {
                    debug!(
                        "Contributor '{}' rendered '{}' for model '{}'",
                        contributor.info().name,
                        object.id,
                        model
                    );
                    return markup;
                }
            }
        }

        for contributor in self.active() {
            if let Some(markup) = contributor.object_markup(object, url_info) {
                debug!(
                    "Contributor '{}' rendered '{}' generically",
                    contributor.info().name,
                    object.id
                );
                return markup;
            }
        }

        render::object_link_default(Some(object))
    }

    /// Collect style records for an export option, in registration order.
    /// A failing contributor is skipped with a logged error.
    pub fn export_styles(&self, option: &str) -> Vec<ExportStyle> {
        let mut styles = Vec::new();
        for contributor in self.active() {
            match contributor.export_styles(option) {
                Ok(mut batch) => styles.append(&mut batch),
                Err(e) => {
                    error!(
                        "Contributor '{}' style enumeration failed (skipped): {}",
                        contributor.info().name,
                        e
                    );
                }
            }
        }
        styles
    }

    /// Build the feed item for one bookmarked object.
    ///
    /// Seeds host defaults, folds the item through every contributor, and
    /// checks the minimum shape after each step. A contributor whose result
    /// breaks the shape yields a contract violation naming it; a contributor
    /// that fails internally is skipped and the previous item kept.
    pub fn rss_item(&self, object: &RepoObject) -> Result<RssItem> {
        let mut item = RssItem::for_object(object, &self.config.base_url);

        for contributor in self.active() {
            let name = contributor.info().name;
            match contributor.alter_rss_item(object, item.clone()) {
                Ok(next) => {
                    if let Err(reason) = next.validate() {
                        return Err(ListmarksError::ContractViolation {
                            contributor: name,
                            reason,
                        });
                    }
                    debug!("Contributor '{}' altered feed item for '{}'", name, object.id);
                    item = next;
                }
                Err(e) => {
                    error!(
                        "Contributor '{}' feed item alteration failed (ignored): {}",
                        name, e
                    );
                }
            }
        }

        Ok(item)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
