//! Contributor system for listmarks
//!
//! This module defines the extension surface a host application invokes
//! while building bookmark exports, per-object markup, and feed items.
//! Contributors implement the [`Contributor`] trait and are held in an
//! ordered [`Registry`]; dispatch iterates in registration order.
//!
//! # Extension points
//!
//! - **Export handler enumeration**: collect provider-name to export-function
//!   mappings at pipeline start
//! - **Export handler alteration**: a fold over the enumerated mapping, run
//!   strictly after every enumeration
//! - **Per-object markup**: a generic renderer plus content-model-specific
//!   overrides, with a guaranteed default fallback
//! - **Export style enumeration**: additive style metadata records
//! - **Feed item alteration**: return-based composition of RSS item fields
//!
//! # Example Contributor
//!
//! ```rust,ignore
//! use listmarks::contrib::{Contributor, ContributorInfo};
//! use listmarks::models::{ObjectUrlInfo, RepoObject};
//!
//! pub struct MyContributor;
//!
//! impl Contributor for MyContributor {
//!     fn info(&self) -> ContributorInfo {
//!         ContributorInfo {
//!             name: "my-contributor".to_string(),
//!             version: "1.0.0".to_string(),
//!             description: "Custom markup for newspaper objects".to_string(),
//!         }
//!     }
//!
//!     fn object_markup_for_model(
//!         &self,
//!         model: &str,
//!         object: &RepoObject,
//!         _url_info: &ObjectUrlInfo,
//!     ) -> Option<String> {
//!         (model == "islandora:newspaperCModel")
//!             .then(|| format!("<em>{}</em>", object.display_text()))
//!     }
//! }
//! ```

mod builtin;
mod registry;
mod traits;

pub use builtin::StandardContributor;
pub use registry::Registry;
pub use traits::{Contributor, ContributorInfo, ExportFn, ExportHandlers, ExportStyle};
