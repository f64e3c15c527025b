// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity model: trainings and competitions.

use crate::models::{BoatType, Gender, Level, Position};
use crate::time_utils::hh_mm;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A seat the activity still needs people for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RequiredPosition {
    pub position: Position,
    /// Remaining people needed; 0 means the seat is full
    pub required_count: u32,
}

impl RequiredPosition {
    pub fn new(position: Position, required_count: u32) -> Self {
        Self {
            position,
            required_count,
        }
    }

    pub fn is_open(&self) -> bool {
        self.required_count > 0
    }

    /// Take one seat. Returns `false` and leaves the count alone when full.
    pub fn fill(&mut self) -> bool {
        if self.required_count == 0 {
            return false;
        }
        self.required_count -= 1;
        true
    }
}

/// Restrictions that only competitions carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CompetitionRules {
    /// Least experienced level still admitted
    pub allowed_level: Level,
    pub allowed_gender: Gender,
    /// Club the participants must row for
    pub organization: String,
}

/// Variant tag of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityKind {
    Training,
    Competition(CompetitionRules),
}

impl ActivityKind {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            ActivityKind::Training => ActivityType::Training,
            ActivityKind::Competition(_) => ActivityType::Competition,
        }
    }
}

/// Payload-free discriminant, used in paths and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Training,
    Competition,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Training => f.write_str("training"),
            ActivityType::Competition => f.write_str("competition"),
        }
    }
}

/// Stored activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Assigned by the store on insert
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// User who created the activity
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub owner_id: u64,
    /// Calendar day the activity takes place (no time of day)
    pub activity_date: NaiveDate,
    #[serde(with = "hh_mm")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub end_time: NaiveTime,
    /// At most one entry per position
    pub required_positions: Vec<RequiredPosition>,
    pub boat_type: BoatType,
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl Activity {
    pub fn activity_type(&self) -> ActivityType {
        self.kind.activity_type()
    }

    /// Positions that still have at least one free seat.
    pub fn open_positions(&self) -> HashSet<Position> {
        self.required_positions
            .iter()
            .filter(|rp| rp.is_open())
            .map(|rp| rp.position)
            .collect()
    }

    /// Take one seat of `position`.
    pub fn fill_position(&mut self, position: Position) -> Result<(), FillError> {
        let slot = self
            .required_positions
            .iter_mut()
            .find(|rp| rp.position == position)
            .ok_or(FillError::NotInTeam(position))?;

        if slot.fill() {
            Ok(())
        } else {
            Err(FillError::AlreadyFilled(position))
        }
    }
}

/// Why a seat could not be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FillError {
    #[error("Position {0:?} not available in team")]
    NotInTeam(Position),

    #[error("Position {0:?} already filled")]
    AlreadyFilled(Position),
}
