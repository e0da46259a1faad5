use crate::constants::{MODULE_SLOTS, SCHEDULE_TIME_FIELDS};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Access flags for the 64 reader-module slots of an access group.
///
/// Slot `n` corresponds to the panel's `AccessModule{n:02}` column and to the
/// `n`-th argument of the access-flag block of `api_SaveAccessGroup`. Slots
/// are addressed 1-64 to match the panel's naming; an unset slot is
/// transmitted as SQL NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessModules([Option<bool>; MODULE_SLOTS]);

impl AccessModules {
    /// All slots unset.
    pub fn new() -> Self {
        Self([None; MODULE_SLOTS])
    }

    /// Every slot set to the same flag.
    pub fn all(value: bool) -> Self {
        Self([Some(value); MODULE_SLOTS])
    }

    /// Read slot `slot` (1-64).
    ///
    /// # Panics
    /// Panics if `slot` is 0 or greater than [`MODULE_SLOTS`].
    pub fn get(&self, slot: usize) -> Option<bool> {
        assert!(
            (1..=MODULE_SLOTS).contains(&slot),
            "module slot {slot} out of range 1-{MODULE_SLOTS}"
        );
        self.0[slot - 1]
    }

    /// Write slot `slot` (1-64).
    ///
    /// # Panics
    /// Panics if `slot` is 0 or greater than [`MODULE_SLOTS`].
    pub fn set(&mut self, slot: usize, value: Option<bool>) {
        assert!(
            (1..=MODULE_SLOTS).contains(&slot),
            "module slot {slot} out of range 1-{MODULE_SLOTS}"
        );
        self.0[slot - 1] = value;
    }

    /// Slots in transmission order (slot 1 first).
    pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        self.0.iter().copied()
    }
}

impl Default for AccessModules {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Option<bool>; MODULE_SLOTS]> for AccessModules {
    fn from(slots: [Option<bool>; MODULE_SLOTS]) -> Self {
        Self(slots)
    }
}

impl Serialize for AccessModules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for AccessModules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Option<bool>>::deserialize(deserializer)?;
        let len = values.len();
        let slots: [Option<bool>; MODULE_SLOTS] = values
            .try_into()
            .map_err(|_| serde::de::Error::invalid_length(len, &"64 module slots"))?;
        Ok(Self(slots))
    }
}

/// Authorization levels for the 64 reader-module slots of an access group.
///
/// Paired positionally with [`AccessModules`]: slot `n` maps to the panel's
/// `AuthorizationModule{n:02}` column. The whole block follows the access-flag
/// block in the `api_SaveAccessGroup` argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationModules([Option<i32>; MODULE_SLOTS]);

impl AuthorizationModules {
    /// All slots unset.
    pub fn new() -> Self {
        Self([None; MODULE_SLOTS])
    }

    /// Every slot set to the same level.
    pub fn all(value: i32) -> Self {
        Self([Some(value); MODULE_SLOTS])
    }

    /// Read slot `slot` (1-64).
    ///
    /// # Panics
    /// Panics if `slot` is 0 or greater than [`MODULE_SLOTS`].
    pub fn get(&self, slot: usize) -> Option<i32> {
        assert!(
            (1..=MODULE_SLOTS).contains(&slot),
            "module slot {slot} out of range 1-{MODULE_SLOTS}"
        );
        self.0[slot - 1]
    }

    /// Write slot `slot` (1-64).
    ///
    /// # Panics
    /// Panics if `slot` is 0 or greater than [`MODULE_SLOTS`].
    pub fn set(&mut self, slot: usize, value: Option<i32>) {
        assert!(
            (1..=MODULE_SLOTS).contains(&slot),
            "module slot {slot} out of range 1-{MODULE_SLOTS}"
        );
        self.0[slot - 1] = value;
    }

    /// Slots in transmission order (slot 1 first).
    pub fn iter(&self) -> impl Iterator<Item = Option<i32>> + '_ {
        self.0.iter().copied()
    }
}

impl Default for AuthorizationModules {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Option<i32>; MODULE_SLOTS]> for AuthorizationModules {
    fn from(slots: [Option<i32>; MODULE_SLOTS]) -> Self {
        Self(slots)
    }
}

impl Serialize for AuthorizationModules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for AuthorizationModules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Option<i32>>::deserialize(deserializer)?;
        let len = values.len();
        let slots: [Option<i32>; MODULE_SLOTS] = values
            .try_into()
            .map_err(|_| serde::de::Error::invalid_length(len, &"64 module slots"))?;
        Ok(Self(slots))
    }
}

/// One start/stop time pair of a schedule interval.
///
/// Hours and minutes travel as four separate integer arguments; an unset
/// field is transmitted as SQL NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimes {
    pub start_hour: Option<i32>,
    pub start_minute: Option<i32>,
    pub stop_hour: Option<i32>,
    pub stop_minute: Option<i32>,
}

impl IntervalTimes {
    /// Convenience constructor for a fully specified interval.
    pub fn new(start_hour: i32, start_minute: i32, stop_hour: i32, stop_minute: i32) -> Self {
        Self {
            start_hour: Some(start_hour),
            start_minute: Some(start_minute),
            stop_hour: Some(stop_hour),
            stop_minute: Some(stop_minute),
        }
    }

    fn flatten(&self) -> [Option<i32>; 4] {
        [
            self.start_hour,
            self.start_minute,
            self.stop_hour,
            self.stop_minute,
        ]
    }
}

/// The two intervals of one day bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub interval1: IntervalTimes,
    pub interval2: IntervalTimes,
}

impl DaySchedule {
    fn flatten(&self) -> [Option<i32>; 8] {
        let mut out = [None; 8];
        out[..4].copy_from_slice(&self.interval1.flatten());
        out[4..].copy_from_slice(&self.interval2.flatten());
        out
    }
}

/// Weekly timetable of a schedule: Monday through Sunday plus the Holiday
/// bucket, each with two intervals.
///
/// [`WeekSchedule::flatten`] produces the 64 integer fields of
/// `api_SaveSchedule` in contract order (bucket order per
/// [`crate::constants::DAY_BUCKET_NAMES`], interval 1 before interval 2,
/// start hour/minute before stop hour/minute).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
    pub holiday: DaySchedule,
}

impl WeekSchedule {
    /// Buckets in transmission order, matching
    /// [`crate::constants::DAY_BUCKET_NAMES`].
    pub fn buckets(&self) -> [&DaySchedule; 8] {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
            &self.holiday,
        ]
    }

    /// Mutable buckets in transmission order.
    pub fn buckets_mut(&mut self) -> [&mut DaySchedule; 8] {
        [
            &mut self.monday,
            &mut self.tuesday,
            &mut self.wednesday,
            &mut self.thursday,
            &mut self.friday,
            &mut self.saturday,
            &mut self.sunday,
            &mut self.holiday,
        ]
    }

    /// The 64 integer fields in contract order.
    pub fn flatten(&self) -> [Option<i32>; SCHEDULE_TIME_FIELDS] {
        let mut out = [None; SCHEDULE_TIME_FIELDS];
        for (bucket, chunk) in self.buckets().into_iter().zip(out.chunks_exact_mut(8)) {
            chunk.copy_from_slice(&bucket.flatten());
        }
        out
    }
}

/// Parameter record for `api_SavePerson`.
///
/// Field declaration order is the positional binding order of the stored
/// procedure and must not be rearranged. An id of `None` (or 0, which the
/// panel treats the same way) creates a new person; an existing id edits
/// that person.
///
/// Validity bounds are wall-clock timestamps of the panel site; they are
/// formatted as `YYYY-MM-DD HH:MM:SS` text at transmission time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonUpsert {
    pub id_person: Option<i64>,
    pub id_folder: Option<i64>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub pin: Option<String>,
    pub workplace: Option<String>,
    pub job: Option<String>,
    pub personal_number: Option<String>,
    pub phone: Option<String>,
    pub cell_phone: Option<String>,
    pub email: Option<String>,
    pub external_key1: Option<i64>,
    pub external_key2: Option<i64>,
    pub validity_origin: Option<NaiveDateTime>,
    pub validity_expiration: Option<NaiveDateTime>,
}

/// Parameter record for `api_SaveCard`.
///
/// Field declaration order is the positional binding order: the owning
/// person's id comes last, after the card attributes, because that is how
/// the procedure declares its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardUpsert {
    pub id_card: Option<i64>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub is_visitors: Option<bool>,
    pub is_one_time_use: Option<bool>,
    pub id_person: Option<i64>,
}

/// Parameter record for `api_SaveAccessGroup`.
///
/// The five scalar fields are followed by the complete access-flag block and
/// then the complete authorization-value block, 64 slots each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGroupUpsert {
    pub id_access_group: Option<i64>,
    pub id_system: Option<i64>,
    pub number: Option<i32>,
    pub user_number: Option<i32>,
    pub name: Option<String>,
    pub access_modules: AccessModules,
    pub authorization_modules: AuthorizationModules,
}

/// Parameter record for `api_SaveSchedule`.
///
/// The schedule ordinal (`number`) is documented as 1-64 by the panel but is
/// passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleUpsert {
    pub id_schedule: Option<i64>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub week: WeekSchedule,
}
