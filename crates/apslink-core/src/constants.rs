//! Catalogue constants for the APS panel database.
//!
//! These constants describe the fixed shapes of the panel's parameter blocks:
//! how many reader-module slots an access group carries, how a weekly
//! schedule is laid out, and the text pattern used for timestamp arguments.
//!
//! # Range constants are documentation, not validation
//!
//! The panel owns all value validation. Constants such as
//! [`MAX_SCHEDULE_NUMBER`] and [`MAX_REGISTER_VALUE`] record what the panel
//! documents as acceptable, but the gateway passes out-of-range values
//! through unchanged and lets the stored procedure accept or reject them.
//! Enforcing these ranges locally would silently diverge from whatever the
//! panel firmware actually does.

// ============================================================================
// Access group parameter block
// ============================================================================

/// Number of reader-module slots per access group.
///
/// Every access group carries one boolean access flag and one integer
/// authorization value per slot, transmitted as two consecutive blocks of
/// 64 positional arguments (flags first, values second).
///
/// # Examples
///
/// ```
/// use apslink_core::constants::MODULE_SLOTS;
/// use apslink_core::AccessModules;
///
/// let modules = AccessModules::default();
/// assert_eq!(modules.iter().count(), MODULE_SLOTS);
/// ```
pub const MODULE_SLOTS: usize = 64;

// ============================================================================
// Schedule parameter block
// ============================================================================

/// Day buckets in a weekly schedule: Monday through Sunday plus Holiday.
pub const DAY_BUCKETS: usize = 8;

/// Time intervals per day bucket.
pub const INTERVALS_PER_DAY: usize = 2;

/// Integer fields per interval: start hour, start minute, stop hour,
/// stop minute.
pub const FIELDS_PER_INTERVAL: usize = 4;

/// Total integer fields in a flattened weekly schedule.
///
/// `8 buckets x 2 intervals x 4 fields = 64`, transmitted after the
/// schedule's id, number, and name.
pub const SCHEDULE_TIME_FIELDS: usize = DAY_BUCKETS * INTERVALS_PER_DAY * FIELDS_PER_INTERVAL;

/// Day-bucket names in transmission order.
///
/// This order is part of the stored-procedure contract: the flattened
/// schedule arguments follow it exactly, and the schedule view names its
/// columns after it (`MondayInterval1StartHour`, ...,
/// `HolidayInterval2StopMinute`).
pub const DAY_BUCKET_NAMES: [&str; DAY_BUCKETS] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
    "Holiday",
];

/// Lowest schedule ordinal the panel documents.
pub const MIN_SCHEDULE_NUMBER: i32 = 1;

/// Highest schedule ordinal the panel documents.
///
/// The panel addresses schedules 1-64. The gateway does not enforce this;
/// see the module-level note on range constants.
pub const MAX_SCHEDULE_NUMBER: i32 = 64;

// ============================================================================
// Register values
// ============================================================================

/// Lowest register value the panel documents for `api_SetRegister`.
pub const MIN_REGISTER_VALUE: i32 = 1;

/// Highest register value the panel documents for `api_SetRegister`.
///
/// Documented range is 1-250; values outside it are passed through and left
/// to the panel to accept or reject.
pub const MAX_REGISTER_VALUE: i32 = 250;

// ============================================================================
// Wire formats
// ============================================================================

/// Text pattern for timestamp arguments, as a [`chrono::format`] string.
///
/// Validity bounds on person records are transmitted as
/// `YYYY-MM-DD HH:MM:SS` text. An absent timestamp is transmitted as SQL
/// NULL, never as an empty or zero-filled string.
///
/// # Examples
///
/// ```
/// use apslink_core::constants::TIMESTAMP_FORMAT;
/// use chrono::NaiveDate;
///
/// let t = NaiveDate::from_ymd_opt(2024, 1, 2)
///     .unwrap()
///     .and_hms_opt(3, 4, 5)
///     .unwrap();
/// assert_eq!(t.format(TIMESTAMP_FORMAT).to_string(), "2024-01-02 03:04:05");
/// ```
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
