use apslink_core::constants::MODULE_SLOTS;
use apslink_core::{AccessModules, AuthorizationModules};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

/// Row of the `api_AccessGroup` view.
///
/// The view spreads the module blocks over 128 numbered columns
/// (`AccessModule01`..`AccessModule64`, `AuthorizationModule01`..
/// `AuthorizationModule64`); `FromRow` folds them back into the block types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessGroup {
    pub id_access_group: i64,
    pub id_system: Option<i64>,
    pub number: Option<i32>,
    pub user_number: Option<i32>,
    pub name: Option<String>,
    pub access_modules: AccessModules,
    pub authorization_modules: AuthorizationModules,
}

impl FromRow<'_, MySqlRow> for AccessGroup {
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        let mut access_modules = AccessModules::new();
        let mut authorization_modules = AuthorizationModules::new();
        for slot in 1..=MODULE_SLOTS {
            access_modules.set(slot, row.try_get(format!("AccessModule{slot:02}").as_str())?);
            authorization_modules.set(
                slot,
                row.try_get(format!("AuthorizationModule{slot:02}").as_str())?,
            );
        }

        Ok(Self {
            id_access_group: row.try_get("IDAccessGroup")?,
            id_system: row.try_get("IDSystem")?,
            number: row.try_get("Number")?,
            user_number: row.try_get("UserNumber")?,
            name: row.try_get("Name")?,
            access_modules,
            authorization_modules,
        })
    }
}

/// Row of the `api_Person_AccessGroup` view: one person-to-group assignment.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PersonAccessGroup {
    #[sqlx(rename = "IDPerson")]
    pub id_person: i64,
    #[sqlx(rename = "IDAccessGroup")]
    pub id_access_group: i64,
}
