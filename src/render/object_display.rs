use super::{escape_html, query_string};
use crate::models::{ObjectUrlInfo, RepoObject};

/// Path prefix for links built from a bare object identifier
const OBJECT_PATH: &str = "object";

/// Render the generic hyperlink for an object from prepared URL info.
///
/// Visible text is `markup`, the target is `path` with the query parameters
/// appended. No target attribute is emitted. URL info with neither markup
/// nor path renders nothing.
pub fn object_link(url_info: &ObjectUrlInfo) -> String {
    if url_info.markup.is_empty() && url_info.path.is_empty() {
        return String::new();
    }
    format!(
        r#"<a href="{}{}">{}</a>"#,
        escape_html(&url_info.path),
        escape_html(&query_string(&url_info.params)),
        escape_html(&url_info.markup),
    )
}

/// Render the default hyperlink for an object, opening in a new browsing
/// context.
///
/// Visible text is the label when present and non-empty, the raw identifier
/// otherwise. An absent object renders nothing.
pub fn object_link_default(object: Option<&RepoObject>) -> String {
    let object = match object {
        Some(object) => object,
        None => return String::new(),
    };
    format!(
        r#"<a href="{}/{}" target="_blank">{}</a>"#,
        OBJECT_PATH,
        escape_html(&object.id),
        escape_html(object.display_text()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_object_link_plain() {
        let info = ObjectUrlInfo::new("Item A", "islandora/object/1");
        assert_eq!(
            object_link(&info),
            r#"<a href="islandora/object/1">Item A</a>"#
        );
    }

    #[test]
    fn test_object_link_has_no_target_attribute() {
        let info = ObjectUrlInfo::new("Item A", "islandora/object/1");
        assert!(!object_link(&info).contains("target="));
    }

    #[test]
    fn test_object_link_appends_query_params() {
        let info = ObjectUrlInfo::new("Item A", "islandora/object/1").with_param("page", "2");
        assert_eq!(
            object_link(&info),
            r#"<a href="islandora/object/1?page=2">Item A</a>"#
        );
    }

    #[test]
    fn test_object_link_empty_input_renders_nothing() {
        assert_eq!(object_link(&ObjectUrlInfo::default()), "");
    }

    #[test]
    fn test_object_link_escapes_markup() {
        let info = ObjectUrlInfo::new("Maps & Charts", "islandora/object/1");
        assert_eq!(
            object_link(&info),
            r#"<a href="islandora/object/1">Maps &amp; Charts</a>"#
        );
    }

    #[rstest]
    #[case(Some("A Sample Book"), "A Sample Book")]
    #[case(Some(""), "islandora:99")]
    #[case(None, "islandora:99")]
    fn test_default_link_text(#[case] label: Option<&str>, #[case] expected_text: &str) {
        let mut object = RepoObject::new("islandora:99");
        if let Some(label) = label {
            object = object.with_label(label);
        }
        let markup = object_link_default(Some(&object));
        assert_eq!(
            markup,
            format!(
                r#"<a href="object/islandora:99" target="_blank">{}</a>"#,
                expected_text
            )
        );
    }

    #[test]
    fn test_default_link_opens_new_context() {
        let object = RepoObject::new("islandora:1");
        assert!(object_link_default(Some(&object)).contains(r#"target="_blank""#));
    }

    #[test]
    fn test_default_link_absent_object_renders_nothing() {
        assert_eq!(object_link_default(None), "");
    }

    #[test]
    fn test_renderers_are_idempotent() {
        let info = ObjectUrlInfo::new("Item A", "islandora/object/1").with_param("q", "maps");
        assert_eq!(object_link(&info), object_link(&info));

        let object = RepoObject::new("islandora:1").with_label("Item A");
        assert_eq!(
            object_link_default(Some(&object)),
            object_link_default(Some(&object))
        );
    }
}
