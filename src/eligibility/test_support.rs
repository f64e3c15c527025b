//! Fixtures shared by the eligibility unit tests.

use crate::models::{
    Activity, ActivityKind, Availability, BoatType, CompetitionRules, Gender, Level, Position,
    RequiredPosition, User,
};
use chrono::{NaiveDate, NaiveTime};

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// 2024-01-01, a Monday.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn user() -> User {
    User {
        id: 1,
        username: "matei".to_string(),
        first_name: "Matei".to_string(),
        last_name: "Ionescu".to_string(),
        organisation: "org".to_string(),
        certificate: BoatType::C4,
        gender: Gender::Male,
        level: Level::Professional,
        position: Position::Cox,
        availabilities: vec![Availability::new(1, time(10, 30), time(14, 20))],
    }
}

pub fn training() -> Activity {
    Activity {
        id: 10,
        owner_id: 2,
        activity_date: monday(),
        start_time: time(11, 45),
        end_time: time(13, 0),
        required_positions: vec![
            RequiredPosition::new(Position::Cox, 2),
            RequiredPosition::new(Position::Coach, 3),
        ],
        boat_type: BoatType::C4,
        kind: ActivityKind::Training,
    }
}

pub fn competition() -> Activity {
    Activity {
        id: 11,
        kind: ActivityKind::Competition(CompetitionRules {
            allowed_level: Level::Professional,
            allowed_gender: Gender::Male,
            organization: "org".to_string(),
        }),
        ..training()
    }
}
