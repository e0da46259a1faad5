use serde::{Deserialize, Serialize};

/// Row of the `api_Folder` view.
///
/// Folders form a tree via `parent_id_folder`; a root folder has no parent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Folder {
    #[sqlx(rename = "IDFolder")]
    pub id_folder: i64,
    #[sqlx(rename = "ParentIDFolder")]
    pub parent_id_folder: Option<i64>,
    pub name: Option<String>,
}

impl Folder {
    /// Whether this folder is a root of the hierarchy.
    pub fn is_root(&self) -> bool {
        self.parent_id_folder.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        let folder = Folder {
            id_folder: 1,
            parent_id_folder: None,
            name: Some("Site".to_string()),
        };
        assert!(folder.is_root());

        let child = Folder {
            id_folder: 2,
            parent_id_folder: Some(1),
            name: None,
        };
        assert!(!child.is_root());
    }
}
