// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod enums;
pub mod requests;
pub mod user;

pub use activity::{
    Activity, ActivityKind, ActivityType, CompetitionRules, FillError, RequiredPosition,
};
pub use enums::{BoatType, Gender, Level, Position};
pub use requests::{ActivityPatch, CompetitionPatch, CreateCompetitionRequest, NewActivity};
pub use user::{Availability, User};
