use serde::{Deserialize, Serialize};

/// Row of the `api_System` view.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct System {
    #[sqlx(rename = "IDSystem")]
    pub id_system: i64,
    pub name: Option<String>,
}

/// Row of the `api_Module` view.
///
/// A module is one hardware unit (reader, door controller) belonging to a
/// system.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Module {
    #[sqlx(rename = "IDModule")]
    pub id_module: i64,
    #[sqlx(rename = "IDSystem")]
    pub id_system: Option<i64>,
    pub name: Option<String>,
}
