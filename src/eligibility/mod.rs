// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eligibility chain: may this user join this activity?
//!
//! Rules run in a fixed order chosen by the activity type and stop at the
//! first failure:
//!
//! - competition: certificate, gender, organization, experience,
//!   availability, start time, position
//! - training: certificate, availability, start time, position
//!
//! Evaluation is read-only and safe to run from many threads at once.

pub mod clock;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::models::{Activity, ActivityKind, ActivityType, User};
use chrono::FixedOffset;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One eligibility dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Rule {
    Certificate,
    Gender,
    Organization,
    Experience,
    Availability,
    StartTime,
    Position,
}

impl Rule {
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Certificate => "certificate",
            Rule::Gender => "gender",
            Rule::Organization => "organization",
            Rule::Experience => "experience",
            Rule::Availability => "availability",
            Rule::StartTime => "start_time",
            Rule::Position => "position",
        }
    }
}

pub const TRAINING_RULES: &[Rule] = &[
    Rule::Certificate,
    Rule::Availability,
    Rule::StartTime,
    Rule::Position,
];

pub const COMPETITION_RULES: &[Rule] = &[
    Rule::Certificate,
    Rule::Gender,
    Rule::Organization,
    Rule::Experience,
    Rule::Availability,
    Rule::StartTime,
    Rule::Position,
];

/// Ordered rule evaluation with an injected clock and an explicit
/// timezone for turning activity dates into instants.
#[derive(Clone)]
pub struct EligibilityChain {
    clock: Arc<dyn Clock>,
    utc_offset: FixedOffset,
}

impl EligibilityChain {
    pub fn new(clock: Arc<dyn Clock>, utc_offset: FixedOffset) -> Self {
        Self { clock, utc_offset }
    }

    /// The rule list applied to activities of this type.
    pub fn rules_for(activity_type: ActivityType) -> &'static [Rule] {
        match activity_type {
            ActivityType::Training => TRAINING_RULES,
            ActivityType::Competition => COMPETITION_RULES,
        }
    }

    /// Evaluate a single rule.
    ///
    /// Competition-only rules have nothing to check on a training and
    /// report `true`; the training list never contains them.
    pub fn check(&self, rule: Rule, user: &User, activity: &Activity) -> bool {
        match (rule, &activity.kind) {
            (Rule::Certificate, _) => rules::certificate(user, activity),
            (Rule::Gender, ActivityKind::Competition(c)) => rules::gender(user, c),
            (Rule::Organization, ActivityKind::Competition(c)) => rules::organization(user, c),
            (Rule::Experience, ActivityKind::Competition(c)) => rules::experience(user, c),
            (Rule::Gender | Rule::Organization | Rule::Experience, ActivityKind::Training) => true,
            (Rule::Availability, _) => rules::availability(user, activity),
            (Rule::StartTime, _) => {
                rules::start_time(activity, self.clock.now_millis(), self.utc_offset)
            }
            (Rule::Position, _) => rules::position(user, activity),
        }
    }

    /// The first rule the user fails, or `None` when eligible.
    pub fn first_failure(&self, user: &User, activity: &Activity) -> Option<Rule> {
        Self::rules_for(activity.activity_type())
            .iter()
            .copied()
            .find(|&rule| !self.check(rule, user, activity))
    }

    pub fn is_eligible(&self, user: &User, activity: &Activity) -> bool {
        match self.first_failure(user, activity) {
            None => true,
            Some(rule) => {
                tracing::debug!(
                    user_id = user.id,
                    activity_id = activity.id,
                    rule = rule.name(),
                    "User not eligible"
                );
                false
            }
        }
    }

    /// Keep the activities the user is eligible for, in input order.
    pub fn filter_eligible<I>(&self, user: &User, activities: I) -> Vec<Activity>
    where
        I: IntoIterator<Item = Activity>,
    {
        activities
            .into_iter()
            .filter(|activity| self.is_eligible(user, activity))
            .collect()
    }
}
