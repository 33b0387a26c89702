use serde::{Deserialize, Serialize};

/// A named bookmark list as shown in the list-info block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookmarkList {
    /// Name of the list
    pub name: String,
    /// Name of the user who created the list
    pub owner: String,
    /// Free-text description
    pub description: String,
    /// Link to the list page
    pub link: String,
}

impl BookmarkList {
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_creation() {
        let list = BookmarkList::new("Reading", "alice", "Things to read", "lists/7");
        assert_eq!(list.name, "Reading");
        assert_eq!(list.owner, "alice");
        assert_eq!(list.link, "lists/7");
    }
}
