use apslink_core::WeekSchedule;
use apslink_core::constants::DAY_BUCKET_NAMES;
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

/// Row of the `api_Schedule` view.
///
/// The view spreads the weekly timetable over 64 columns named
/// `{Day}Interval{N}{Field}` (e.g. `MondayInterval1StartHour`); `FromRow`
/// folds them back into a [`WeekSchedule`]. `id_number` is the panel's
/// schedule ordinal (documented range 1-64).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id_schedule: i64,
    pub id_number: Option<i32>,
    pub name: Option<String>,
    pub week: WeekSchedule,
}

impl FromRow<'_, MySqlRow> for Schedule {
    fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        let mut week = WeekSchedule::default();
        for (bucket_name, bucket) in DAY_BUCKET_NAMES.iter().zip(week.buckets_mut()) {
            for (interval_no, interval) in [&mut bucket.interval1, &mut bucket.interval2]
                .into_iter()
                .enumerate()
                .map(|(i, interval)| (i + 1, interval))
            {
                let column = |field: &str| format!("{bucket_name}Interval{interval_no}{field}");
                interval.start_hour = row.try_get(column("StartHour").as_str())?;
                interval.start_minute = row.try_get(column("StartMinute").as_str())?;
                interval.stop_hour = row.try_get(column("StopHour").as_str())?;
                interval.stop_minute = row.try_get(column("StopMinute").as_str())?;
            }
        }

        Ok(Self {
            id_schedule: row.try_get("IDSchedule")?,
            id_number: row.try_get("IDNumber")?,
            name: row.try_get("Name")?,
            week,
        })
    }
}
