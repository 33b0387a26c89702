//! Built-in contributor shipped with the library

use std::sync::Arc;

use super::traits::{Contributor, ContributorInfo, ExportFn, ExportHandlers, ExportStyle};
use crate::error::Result;
use crate::models::{ObjectUrlInfo, RepoObject};
use crate::render;

/// The stock contributor: JSON and CSV export handlers, generic link markup,
/// and the basic export styles.
pub struct StandardContributor;

fn export_json(objects: &[RepoObject]) -> Result<String> {
    Ok(serde_json::to_string_pretty(objects)?)
}

fn export_csv(objects: &[RepoObject]) -> Result<String> {
    let mut out = String::from("id,label\n");
    for object in objects {
        out.push_str(&format!(
            "{},{}\n",
            csv_field(&object.id),
            csv_field(object.display_text())
        ));
    }
    Ok(out)
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl Contributor for StandardContributor {
    fn info(&self) -> ContributorInfo {
        ContributorInfo {
            name: "standard".to_string(),
            version: "1.0.0".to_string(),
            description: "Stock export handlers and object markup".to_string(),
        }
    }

    fn export_handlers(&self) -> Result<ExportHandlers> {
        let mut handlers = ExportHandlers::new();
        handlers.insert("standard-json".to_string(), Arc::new(export_json) as ExportFn);
        handlers.insert("standard-csv".to_string(), Arc::new(export_csv) as ExportFn);
        Ok(handlers)
    }

    fn object_markup(&self, _object: &RepoObject, url_info: &ObjectUrlInfo) -> Option<String> {
        let markup = render::object_link(url_info);
        if markup.is_empty() {
            None
        } else {
            Some(markup)
        }
    }

    fn export_styles(&self, option: &str) -> Result<Vec<ExportStyle>> {
        let styles = match option {
            "list" => vec![
                ExportStyle::new("standard.compact", "Compact").with_setting("columns", "1"),
                ExportStyle::new("standard.detailed", "Detailed")
                    .with_setting("columns", "2")
                    .with_setting("show_description", "true"),
            ],
            _ => Vec::new(),
        };
        Ok(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_handlers_registered() {
        let handlers = StandardContributor.export_handlers().unwrap();
        assert!(handlers.contains_key("standard-json"));
        assert!(handlers.contains_key("standard-csv"));
    }

    #[test]
    fn test_json_export() {
        let objects = [RepoObject::new("islandora:1").with_label("A Book")];
        let json = export_json(&objects).unwrap();
        let back: Vec<RepoObject> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].id, "islandora:1");
    }

    #[test]
    fn test_csv_export() {
        let objects = [
            RepoObject::new("islandora:1").with_label("A Book"),
            RepoObject::new("islandora:2"),
        ];
        let csv = export_csv(&objects).unwrap();
        assert_eq!(csv, "id,label\nislandora:1,A Book\nislandora:2,islandora:2\n");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_generic_markup_uses_link_template() {
        let object = RepoObject::new("islandora:1");
        let url_info = ObjectUrlInfo::new("Item A", "islandora/object/1");
        let markup = StandardContributor.object_markup(&object, &url_info);
        assert_eq!(
            markup.as_deref(),
            Some(r#"<a href="islandora/object/1">Item A</a>"#)
        );
    }

    #[test]
    fn test_generic_markup_declines_empty_url_info() {
        let object = RepoObject::new("islandora:1");
        let markup = StandardContributor.object_markup(&object, &ObjectUrlInfo::default());
        assert!(markup.is_none());
    }

    #[test]
    fn test_styles_only_for_list_option() {
        assert_eq!(StandardContributor.export_styles("list").unwrap().len(), 2);
        assert!(StandardContributor.export_styles("grid").unwrap().is_empty());
    }
}
