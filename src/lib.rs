// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rowing activities: trainings and competitions for a rowing club
//!
//! This crate provides the backend API for publishing activities and
//! deciding which of them a rower is eligible to join.

pub mod config;
pub mod db;
pub mod eligibility;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::ActivityService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activity_service: ActivityService,
}
