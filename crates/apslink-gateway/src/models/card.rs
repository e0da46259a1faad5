use serde::{Deserialize, Serialize};

/// Row of the `api_Card` view.
///
/// `code` is unique per card. The visitor and one-time-use flags mark
/// special-purpose cards; an ordinary employee card has both unset or false.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Card {
    #[sqlx(rename = "IDCard")]
    pub id_card: i64,
    #[sqlx(rename = "IDPerson")]
    pub id_person: Option<i64>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub is_visitors: Option<bool>,
    pub is_one_time_use: Option<bool>,
}
