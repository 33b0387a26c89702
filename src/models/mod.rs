//! Records exchanged across the extension boundary.
//!
//! Every record here is built fresh per pipeline invocation, handed to
//! contributors, and discarded once the host has consumed the result.
//! Nothing persists between invocations.

pub mod list;
pub mod object;
pub mod rss;

pub use list::BookmarkList;
pub use object::{ObjectUrlInfo, RepoObject};
pub use rss::{RssElement, RssItem};
