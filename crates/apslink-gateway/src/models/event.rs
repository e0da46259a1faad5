use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Row of the event read: `api_Event` joined to `api_EventDefinition`.
///
/// The definition view's description column is misspelled `Decription` in
/// the vendor schema; the join aliases it to `Description`, so this row
/// reads the corrected name. The misspelled source column is the schema
/// owner's to fix.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    #[sqlx(rename = "IDEvent")]
    pub id_event: i64,
    #[sqlx(rename = "ID_System")]
    pub id_system: i64,
    #[sqlx(rename = "ID_Module")]
    pub id_module: i64,
    #[sqlx(rename = "ID_EventCode")]
    pub id_event_code: i64,
    #[sqlx(rename = "Time")]
    pub time: Option<NaiveDateTime>,
    #[sqlx(rename = "Description")]
    pub description: Option<String>,
}
