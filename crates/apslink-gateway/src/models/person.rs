use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Row of the `api_Person` view.
///
/// Validity bounds are wall-clock timestamps of the panel site; a missing
/// bound means the permission is open-ended in that direction.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Person {
    #[sqlx(rename = "IDPerson")]
    pub id_person: i64,
    #[sqlx(rename = "IDFolder")]
    pub id_folder: Option<i64>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    #[sqlx(rename = "PIN")]
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

impl Person {
    /// Display name assembled from the present name parts.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the person's permission is valid at `at`.
    ///
    /// Missing bounds are treated as unbounded on that side.
    pub fn is_valid_at(&self, at: NaiveDateTime) -> bool {
        let after_origin = self.validity_origin.is_none_or(|origin| at >= origin);
        let before_expiration = self
            .validity_expiration
            .is_none_or(|expiration| at <= expiration);
        after_origin && before_expiration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn test_person() -> Person {
        Person {
            id_person: 1,
            id_folder: None,
            first_name: Some("Jan".to_string()),
            middle_name: None,
            last_name: Some("Novak".to_string()),
            title: None,
            pin: None,
            workplace: None,
            job: None,
            personal_number: None,
            phone: None,
            cell_phone: None,
            email: None,
            external_key1: None,
            external_key2: None,
            validity_origin: Some(at(10)),
            validity_expiration: Some(at(20)),
        }
    }

    #[test]
    fn full_name_skips_missing_parts() {
        assert_eq!(test_person().full_name(), "Jan Novak");
    }

    #[test]
    fn validity_window_is_inclusive() {
        let person = test_person();
        assert!(person.is_valid_at(at(10)));
        assert!(person.is_valid_at(at(15)));
        assert!(person.is_valid_at(at(20)));
        assert!(!person.is_valid_at(at(9)));
        assert!(!person.is_valid_at(at(21)));
    }

    #[test]
    fn missing_bounds_are_open_ended() {
        let mut person = test_person();
        person.validity_origin = None;
        person.validity_expiration = None;
        assert!(person.is_valid_at(at(1)));
        assert!(person.is_valid_at(at(28)));
    }
}
