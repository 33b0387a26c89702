use super::escape_html;
use crate::models::BookmarkList;

/// Render the fixed info block for one bookmark list: name, owner,
/// description, and the list URL exposed as a copyable input value.
pub fn list_info(list: &BookmarkList) -> String {
    let mut out = String::new();
    out.push_str("<div>\n");
    out.push_str(&format!("  <h1>{}</h1>\n", escape_html(&list.name)));
    out.push_str("  <hr/>\n");
    out.push_str(&format!("  <h3>By : {}</h3>\n", escape_html(&list.owner)));
    out.push_str("  <h3>Description : </h3>\n");
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&list.description)));
    out.push_str("  <hr/>\n");
    out.push_str("  <label for=\"list_url\">URL</label>\n");
    out.push_str(&format!(
        "  <input id=\"list_url_link\" name=\"list_url\" value=\"{}\"/>\n",
        escape_html(&list.link)
    ));
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_info_shows_all_fields() {
        let list = BookmarkList::new(
            "Reading",
            "alice",
            "Things to read",
            "https://repo.example.org/lists/7",
        );
        let markup = list_info(&list);

        assert!(markup.contains("<h1>Reading</h1>"));
        assert!(markup.contains("By : alice"));
        assert!(markup.contains("<p>Things to read</p>"));
        assert!(markup.contains(r#"value="https://repo.example.org/lists/7""#));
    }

    #[test]
    fn test_list_info_exposes_copyable_link() {
        let list = BookmarkList::new("Reading", "alice", "", "lists/7");
        let markup = list_info(&list);
        assert!(markup.contains(r#"<label for="list_url">URL</label>"#));
        assert!(markup.contains(r#"<input id="list_url_link" name="list_url" value="lists/7"/>"#));
    }

    #[test]
    fn test_list_info_escapes_values() {
        let list = BookmarkList::new("Maps & Charts", "bob", "<script>", "lists/8");
        let markup = list_info(&list);
        assert!(markup.contains("Maps &amp; Charts"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_list_info_is_deterministic() {
        let list = BookmarkList::new("Reading", "alice", "Things to read", "lists/7");
        assert_eq!(list_info(&list), list_info(&list));
    }
}
