//! Presentation templates: pure string renderers for bookmark lists and
//! repository objects.
//!
//! Every renderer is a total function over well-formed input and is
//! deterministic: identical input yields byte-identical output.

mod list_info;
mod object_display;

pub use list_info::list_info;
pub use object_display::{object_link, object_link_default};

use std::collections::BTreeMap;

/// Escape text for embedding in markup
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode one query component. Alphanumerics and unreserved marks
/// pass through untouched.
pub(crate) fn encode_query_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Build the query suffix ("?k=v&k2=v2") for a parameter map; an empty map
/// yields an empty string
pub(crate) fn query_string(params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                encode_query_component(k),
                encode_query_component(v)
            )
        })
        .collect();
    format!("?{}", encoded.join("&"))
}
