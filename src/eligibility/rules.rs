// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Individual eligibility rules.
//!
//! Each rule is a pure function over one `(user, activity)` pair. Ordering
//! and short-circuiting live in the chain, not here.

use crate::models::{Activity, ActivityType, CompetitionRules, User};
use crate::time_utils::{local_midnight_epoch_millis, minutes_into_day_millis};
use chrono::{Datelike, FixedOffset};

/// Minimum minutes between now and the start of a training.
pub const TRAINING_LEAD_MINUTES: i64 = 30;
/// Minimum minutes between now and the start of a competition.
pub const COMPETITION_LEAD_MINUTES: i64 = 24 * 60;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// The user must be certified for an equal or larger boat.
pub fn certificate(user: &User, activity: &Activity) -> bool {
    user.certificate.label() >= activity.boat_type.label()
}

pub fn gender(user: &User, rules: &CompetitionRules) -> bool {
    user.gender == rules.allowed_gender
}

/// Case-sensitive exact match.
pub fn organization(user: &User, rules: &CompetitionRules) -> bool {
    user.organisation == rules.organization
}

/// Only users at least as experienced as the allowed level pass.
pub fn experience(user: &User, rules: &CompetitionRules) -> bool {
    user.level.label() <= rules.allowed_level.label()
}

/// Some single availability on the activity's weekday must contain the
/// whole activity window, bounds inclusive.
pub fn availability(user: &User, activity: &Activity) -> bool {
    let weekday = activity.activity_date.weekday().number_from_monday();

    user.availabilities.iter().any(|slot| {
        u32::from(slot.day_of_week) == weekday
            && activity.start_time >= slot.start_time
            && activity.end_time >= slot.start_time
            && activity.start_time <= slot.end_time
            && activity.end_time <= slot.end_time
    })
}

/// Whole minutes from `now_millis` until the activity starts, truncated
/// toward zero. Seconds of the start time are ignored.
///
/// `None` when the start instant cannot be represented.
pub fn minutes_until_start(
    activity: &Activity,
    now_millis: i64,
    utc_offset: FixedOffset,
) -> Option<i64> {
    let starts_at = local_midnight_epoch_millis(activity.activity_date, utc_offset)?
        .checked_add(minutes_into_day_millis(activity.start_time))?;
    Some(starts_at.checked_sub(now_millis)? / MILLIS_PER_MINUTE)
}

pub fn required_lead_minutes(activity_type: ActivityType) -> i64 {
    match activity_type {
        ActivityType::Training => TRAINING_LEAD_MINUTES,
        ActivityType::Competition => COMPETITION_LEAD_MINUTES,
    }
}

/// The activity must start at least the type's lead time after now.
pub fn start_time(activity: &Activity, now_millis: i64, utc_offset: FixedOffset) -> bool {
    match minutes_until_start(activity, now_millis, utc_offset) {
        Some(minutes) => minutes >= required_lead_minutes(activity.activity_type()),
        None => {
            tracing::warn!(
                activity_id = activity.id,
                activity_date = %activity.activity_date,
                "Activity start out of range"
            );
            false
        }
    }
}

/// The user's position must still have a free seat.
pub fn position(user: &User, activity: &Activity) -> bool {
    activity.open_positions().contains(&user.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::test_support::{competition, monday, time, training, user};
    use crate::models::{Availability, BoatType, Gender, Level, Position, RequiredPosition};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn rules_of(activity: &Activity) -> &CompetitionRules {
        match &activity.kind {
            crate::models::ActivityKind::Competition(rules) => rules,
            crate::models::ActivityKind::Training => panic!("not a competition"),
        }
    }

    // ─── Certificate ─────────────────────────────────────────────

    #[test]
    fn test_certificate_equal_label_passes() {
        let mut u = user();
        let mut a = training();
        u.certificate = BoatType::FourPlus;
        a.boat_type = BoatType::FourPlus;
        assert!(certificate(&u, &a));
    }

    #[test]
    fn test_certificate_larger_boat_passes() {
        let mut u = user();
        u.certificate = BoatType::EightPlus;
        assert!(certificate(&u, &training()));
    }

    #[test]
    fn test_certificate_smaller_boat_fails() {
        let mut a = training();
        a.boat_type = BoatType::EightPlus;
        assert!(!certificate(&user(), &a));
    }

    // ─── Gender / Organization ───────────────────────────────────

    #[test]
    fn test_gender_must_match_exactly() {
        let a = competition();
        let mut u = user();
        assert!(gender(&u, rules_of(&a)));

        u.gender = Gender::Other;
        assert!(!gender(&u, rules_of(&a)));
    }

    #[test]
    fn test_organization_is_case_sensitive() {
        let a = competition();
        let mut u = user();
        assert!(organization(&u, rules_of(&a)));

        u.organisation = "ORG".to_string();
        assert!(!organization(&u, rules_of(&a)));
    }

    // ─── Experience ──────────────────────────────────────────────

    #[test]
    fn test_professional_may_join_amateur_competition() {
        let mut a = competition();
        if let crate::models::ActivityKind::Competition(rules) = &mut a.kind {
            rules.allowed_level = Level::Amateur;
        }
        let mut u = user();
        u.level = Level::Professional;
        assert!(experience(&u, rules_of(&a)));
    }

    #[test]
    fn test_amateur_may_not_join_professional_competition() {
        let a = competition();
        let mut u = user();
        u.level = Level::Amateur;
        assert!(!experience(&u, rules_of(&a)));
    }

    // ─── Availability ────────────────────────────────────────────

    #[test]
    fn test_availability_exact_window_passes() {
        let mut u = user();
        u.availabilities = vec![Availability::new(1, time(11, 45), time(13, 0))];
        assert!(availability(&u, &training()));
    }

    #[test]
    fn test_availability_start_one_minute_early_fails() {
        let mut u = user();
        u.availabilities = vec![Availability::new(1, time(11, 46), time(13, 0))];
        assert!(!availability(&u, &training()));
    }

    #[test]
    fn test_availability_end_one_minute_late_fails() {
        let mut u = user();
        u.availabilities = vec![Availability::new(1, time(11, 45), time(12, 59))];
        assert!(!availability(&u, &training()));
    }

    #[test]
    fn test_availability_wrong_weekday_fails() {
        let mut u = user();
        u.availabilities = vec![Availability::new(2, time(10, 30), time(14, 20))];
        assert!(!availability(&u, &training()));
    }

    #[test]
    fn test_availability_partial_windows_do_not_combine() {
        let mut u = user();
        u.availabilities = vec![
            Availability::new(1, time(10, 0), time(12, 30)),
            Availability::new(1, time(12, 30), time(14, 0)),
        ];
        assert!(!availability(&u, &training()));
    }

    #[test]
    fn test_availability_any_matching_entry_passes() {
        let mut u = user();
        u.availabilities = vec![
            Availability::new(3, time(12, 30), time(12, 20)),
            Availability::new(1, time(10, 30), time(14, 20)),
        ];
        assert!(availability(&u, &training()));
    }

    #[test]
    fn test_availability_empty_fails() {
        let mut u = user();
        u.availabilities.clear();
        assert!(!availability(&u, &training()));
    }

    #[test]
    fn test_availability_uses_activity_weekday() {
        let mut a = training();
        a.activity_date = monday().succ_opt().unwrap(); // Tuesday
        let mut u = user();
        u.availabilities = vec![Availability::new(2, time(10, 30), time(14, 20))];
        assert!(availability(&u, &a));
    }

    // ─── Start time ──────────────────────────────────────────────

    fn start_millis(activity: &Activity) -> i64 {
        local_midnight_epoch_millis(activity.activity_date, utc()).unwrap()
            + minutes_into_day_millis(activity.start_time)
    }

    #[test]
    fn test_competition_lead_time_boundary() {
        let a = competition();
        let start = start_millis(&a);

        assert!(start_time(&a, start - 1440 * MILLIS_PER_MINUTE, utc()));
        // One millisecond later truncates to 1439 minutes.
        assert!(!start_time(&a, start - 1440 * MILLIS_PER_MINUTE + 1, utc()));
        assert!(!start_time(&a, start - 1439 * MILLIS_PER_MINUTE, utc()));
    }

    #[test]
    fn test_training_lead_time_boundary() {
        let a = training();
        let start = start_millis(&a);

        assert!(start_time(&a, start - 30 * MILLIS_PER_MINUTE, utc()));
        assert!(!start_time(&a, start - 29 * MILLIS_PER_MINUTE, utc()));
    }

    #[test]
    fn test_started_activity_fails() {
        let a = training();
        assert!(!start_time(&a, start_millis(&a) + MILLIS_PER_MINUTE, utc()));
    }

    #[test]
    fn test_lead_time_respects_offset() {
        let a = training();
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let utc_boundary = start_millis(&a) - 30 * MILLIS_PER_MINUTE;

        // In UTC+1 the activity starts an hour earlier in absolute time.
        assert!(start_time(&a, utc_boundary, utc()));
        assert!(!start_time(&a, utc_boundary, plus_one));
        assert_eq!(minutes_until_start(&a, utc_boundary, plus_one), Some(30 - 60));
    }

    #[test]
    fn test_start_out_of_range_fails_without_panicking() {
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let mut a = training();
        a.activity_date = chrono::NaiveDate::MIN;

        assert_eq!(minutes_until_start(&a, 0, plus_one), None);
        assert!(!start_time(&a, 0, plus_one));

        // A clock at the far end of i64 must not overflow the subtraction.
        let b = training();
        assert_eq!(minutes_until_start(&b, i64::MIN, utc()), None);
    }

    // ─── Position ────────────────────────────────────────────────

    #[test]
    fn test_position_open_seat_passes() {
        assert!(position(&user(), &training()));
    }

    #[test]
    fn test_position_filled_seat_fails() {
        let mut a = training();
        a.required_positions = vec![
            RequiredPosition::new(Position::Cox, 0),
            RequiredPosition::new(Position::Coach, 3),
        ];
        assert!(!position(&user(), &a));
    }

    #[test]
    fn test_position_no_substitution() {
        let mut u = user();
        u.position = Position::PortSideRower;
        assert!(!position(&u, &training()));
    }

    #[test]
    fn test_position_empty_set_fails() {
        let mut a = training();
        a.required_positions.clear();
        assert!(!position(&user(), &a));
    }
}
