//! User profile as supplied to the eligibility check.

use crate::models::{BoatType, Gender, Level, Position};
use crate::time_utils::hh_mm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A weekly window in which the user can row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Availability {
    /// ISO day of week, Monday = 1
    #[validate(range(min = 1, max = 7, message = "day_of_week must be between 1 and 7"))]
    pub day_of_week: u8,
    #[serde(with = "hh_mm")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub end_time: NaiveTime,
}

impl Availability {
    pub fn new(day_of_week: u8, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            day_of_week,
            start_time,
            end_time,
        }
    }
}

/// User profile owned by the user service.
///
/// `position` is the single seat the user wants to fill for this check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Rowing club the user belongs to
    pub organisation: String,
    /// Largest boat the user is certified for
    pub certificate: BoatType,
    pub gender: Gender,
    pub level: Level,
    pub position: Position,
    #[serde(default)]
    #[validate(nested)]
    pub availabilities: Vec<Availability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_with_hh_mm_times() {
        let json = r#"{
            "id": 1,
            "username": "matei",
            "first_name": "Matei",
            "last_name": "Ionescu",
            "organisation": "org",
            "certificate": "C4",
            "gender": "MALE",
            "level": "PROFESSIONAL",
            "position": "COX",
            "availabilities": [
                { "day_of_week": 1, "start_time": "10:30", "end_time": "14:20" }
            ]
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.availabilities.len(), 1);
        assert_eq!(
            user.availabilities[0].start_time,
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_day_of_week_out_of_range_fails_validation() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let availability = Availability::new(8, noon, noon);
        assert!(availability.validate().is_err());
        assert!(Availability::new(0, noon, noon).validate().is_err());
        assert!(Availability::new(7, noon, noon).validate().is_ok());
    }
}
