use serde::{Deserialize, Serialize};

/// Row of the `api_Holiday` view.
///
/// Holidays are day-and-month pairs without a year; the panel applies them
/// annually through the Holiday bucket of each schedule.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Holiday {
    #[sqlx(rename = "IDHoliday")]
    pub id_holiday: i64,
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub name: Option<String>,
}
