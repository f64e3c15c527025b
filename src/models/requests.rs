// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request bodies for creating and editing activities.

use crate::models::{Activity, ActivityKind, BoatType, Gender, Level, Position, RequiredPosition};
use crate::time_utils::hh_mm;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Deserialize;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use validator::{Validate, ValidationError, ValidationErrors};

/// Calendar years an activity may be scheduled in.
const ACTIVITY_YEARS: RangeInclusive<i32> = 1..=9999;

/// Fields every new activity needs.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_new_activity_window"))]
pub struct NewActivity {
    #[validate(custom(function = "validate_activity_date"))]
    pub activity_date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    #[validate(
        length(min = 1, message = "At least one required position must be given"),
        custom(function = "validate_unique_positions")
    )]
    pub required_positions: Vec<RequiredPosition>,
    pub boat_type: BoatType,
}

impl NewActivity {
    /// Build the activity record; the store assigns the id.
    pub fn into_activity(self, owner_id: u64, kind: ActivityKind) -> Activity {
        Activity {
            id: 0,
            owner_id,
            activity_date: self.activity_date,
            start_time: self.start_time,
            end_time: self.end_time,
            required_positions: self.required_positions,
            boat_type: self.boat_type,
            kind,
        }
    }
}

/// Competition body: the shared activity fields plus the restrictions,
/// all at the top level of the JSON object.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompetitionRequest {
    #[serde(flatten)]
    pub activity: NewActivity,
    pub allowed_level: Level,
    pub allowed_gender: Gender,
    pub organization: String,
}

// Hand-written so errors in the flattened fields keep their wire names
// instead of gaining an `activity.` prefix.
impl Validate for CreateCompetitionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.activity.validate().err().unwrap_or_default();
        if let Err(err) = validate_organization(&self.organization) {
            errors.add("organization", err);
        }
        into_result(errors)
    }
}

/// Partial update; absent fields stay as they are.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ActivityPatch {
    #[serde(default)]
    #[validate(custom(function = "validate_activity_date"))]
    pub activity_date: Option<NaiveDate>,
    #[serde(default, with = "hh_mm::option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hh_mm::option")]
    pub end_time: Option<NaiveTime>,
    /// Replaces the whole set when present
    #[serde(default)]
    #[validate(
        length(min = 1, message = "At least one required position must be given"),
        custom(function = "validate_unique_positions")
    )]
    pub required_positions: Option<Vec<RequiredPosition>>,
    #[serde(default)]
    pub boat_type: Option<BoatType>,
}

impl ActivityPatch {
    pub fn apply(self, activity: &mut Activity) {
        if let Some(date) = self.activity_date {
            activity.activity_date = date;
        }
        if let Some(start) = self.start_time {
            activity.start_time = start;
        }
        if let Some(end) = self.end_time {
            activity.end_time = end;
        }
        if let Some(positions) = self.required_positions {
            activity.required_positions = positions;
        }
        if let Some(boat_type) = self.boat_type {
            activity.boat_type = boat_type;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitionPatch {
    #[serde(flatten)]
    pub activity: ActivityPatch,
    #[serde(default)]
    pub allowed_level: Option<Level>,
    #[serde(default)]
    pub allowed_gender: Option<Gender>,
    #[serde(default)]
    pub organization: Option<String>,
}

impl Validate for CompetitionPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.activity.validate().err().unwrap_or_default();
        if let Some(Err(err)) = self.organization.as_deref().map(validate_organization) {
            errors.add("organization", err);
        }
        into_result(errors)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FillPositionRequest {
    pub position: Position,
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_organization(organization: &str) -> Result<(), ValidationError> {
    if organization.is_empty() {
        return Err(ValidationError::new("length")
            .with_message("Organization must not be empty".into()));
    }
    Ok(())
}

fn validate_activity_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if !ACTIVITY_YEARS.contains(&date.year()) {
        return Err(ValidationError::new("date_out_of_range")
            .with_message("activity_date must fall in years 1 to 9999".into()));
    }
    Ok(())
}

fn validate_unique_positions(positions: &[RequiredPosition]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if positions.iter().all(|rp| seen.insert(rp.position)) {
        Ok(())
    } else {
        Err(ValidationError::new("duplicate_position")
            .with_message("Each position may be listed only once".into()))
    }
}

fn validate_new_activity_window(activity: &NewActivity) -> Result<(), ValidationError> {
    validate_window(activity.start_time, activity.end_time)
}

/// An activity may not end before it starts.
pub fn validate_window(start: NaiveTime, end: NaiveTime) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::new("end_before_start")
            .with_message("end_time must not be before start_time".into()));
    }
    Ok(())
}
