// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity service.
//!
//! Owns the activity workflows around the store:
//! 1. Create trainings and competitions
//! 2. List activities, optionally only the ones a user is eligible for
//! 3. Fill seats once a join request has been accepted
//! 4. Owner-only updates and deletion

use crate::db::ActivityStore;
use crate::eligibility::{EligibilityChain, Rule};
use crate::error::{AppError, Result};
use crate::models::requests::validate_window;
use crate::models::{
    Activity, ActivityKind, ActivityPatch, ActivityType, CompetitionPatch, CompetitionRules,
    CreateCompetitionRequest, FillError, NewActivity, Position, User,
};

#[derive(Clone)]
pub struct ActivityService {
    store: ActivityStore,
    chain: EligibilityChain,
}

impl ActivityService {
    pub fn new(store: ActivityStore, chain: EligibilityChain) -> Self {
        Self { store, chain }
    }

    pub fn create_training(&self, owner_id: u64, request: NewActivity) -> Activity {
        let activity = self
            .store
            .insert(request.into_activity(owner_id, ActivityKind::Training));
        tracing::info!(activity_id = activity.id, owner_id, "Training created");
        activity
    }

    pub fn create_competition(&self, owner_id: u64, request: CreateCompetitionRequest) -> Activity {
        let rules = CompetitionRules {
            allowed_level: request.allowed_level,
            allowed_gender: request.allowed_gender,
            organization: request.organization,
        };
        let activity = self.store.insert(
            request
                .activity
                .into_activity(owner_id, ActivityKind::Competition(rules)),
        );
        tracing::info!(activity_id = activity.id, owner_id, "Competition created");
        activity
    }

    pub fn get(&self, id: u64) -> Result<Activity> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
    }

    /// Number of stored activities of every type.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn list(&self, activity_type: Option<ActivityType>) -> Vec<Activity> {
        self.store.list(activity_type)
    }

    /// Activities of one type that `user` may join, in store order.
    pub fn compatible(&self, user: &User, activity_type: ActivityType) -> Vec<Activity> {
        tracing::info!(
            user_id = user.id,
            activity_type = %activity_type,
            "Finding compatible activities"
        );
        let candidates = self.store.list(Some(activity_type));
        let total = candidates.len();
        let eligible = self.chain.filter_eligible(user, candidates);

        tracing::debug!(
            user_id = user.id,
            total,
            eligible = eligible.len(),
            "Compatible activities found"
        );
        eligible
    }

    /// First failing rule for `user` on activity `id`, `None` when eligible.
    pub fn check_eligibility(&self, user: &User, id: u64) -> Result<Option<Rule>> {
        let activity = self.get(id)?;
        Ok(self.chain.first_failure(user, &activity))
    }

    /// Take one seat of `position` in activity `id`.
    pub fn fill_position(&self, id: u64, position: Position) -> Result<Activity> {
        let outcome = self
            .store
            .update(id, |activity| {
                activity.fill_position(position).map(|()| activity.clone())
            })
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        match outcome {
            Ok(activity) => {
                tracing::info!(activity_id = id, ?position, "Position filled");
                Ok(activity)
            }
            Err(err @ (FillError::NotInTeam(_) | FillError::AlreadyFilled(_))) => {
                tracing::debug!(activity_id = id, ?position, error = %err, "Fill rejected");
                Err(AppError::BadRequest(err.to_string()))
            }
        }
    }

    pub fn update_training(&self, caller: u64, id: u64, patch: ActivityPatch) -> Result<Activity> {
        self.update(caller, id, ActivityType::Training, |activity| {
            patch.apply(activity);
        })
    }

    pub fn update_competition(
        &self,
        caller: u64,
        id: u64,
        patch: CompetitionPatch,
    ) -> Result<Activity> {
        self.update(caller, id, ActivityType::Competition, |activity| {
            let CompetitionPatch {
                activity: shared,
                allowed_level,
                allowed_gender,
                organization,
            } = patch;
            shared.apply(activity);

            if let ActivityKind::Competition(rules) = &mut activity.kind {
                if let Some(level) = allowed_level {
                    rules.allowed_level = level;
                }
                if let Some(gender) = allowed_gender {
                    rules.allowed_gender = gender;
                }
                if let Some(organization) = organization {
                    rules.organization = organization;
                }
            }
        })
    }

    /// Edit an activity of `expected` type owned by `caller`.
    ///
    /// The edit runs on a copy and is only stored when the result is
    /// still a valid time window.
    fn update<F>(&self, caller: u64, id: u64, expected: ActivityType, edit: F) -> Result<Activity>
    where
        F: FnOnce(&mut Activity),
    {
        let outcome = self
            .store
            .update(id, |stored| {
                let actual = stored.activity_type();
                if actual != expected {
                    return Err(AppError::BadRequest(format!(
                        "Activity {} is a {}, use the {} update instead",
                        id, actual, actual
                    )));
                }
                if stored.owner_id != caller {
                    return Err(AppError::Forbidden(
                        "User does not have permissions to edit activity".to_string(),
                    ));
                }

                let mut updated = stored.clone();
                edit(&mut updated);
                validate_window(updated.start_time, updated.end_time).map_err(|_| {
                    AppError::BadRequest("end_time must not be before start_time".to_string())
                })?;

                *stored = updated.clone();
                Ok(updated)
            })
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))??;

        tracing::info!(activity_id = id, owner_id = caller, "Activity updated");
        Ok(outcome)
    }

    /// Remove an activity owned by `caller`.
    pub fn delete(&self, caller: u64, id: u64) -> Result<()> {
        let activity = self.get(id)?;
        if activity.owner_id != caller {
            tracing::warn!(
                activity_id = id,
                caller,
                owner_id = activity.owner_id,
                "Delete refused for non-owner"
            );
            return Err(AppError::Forbidden(
                "User does not have permissions to delete activity".to_string(),
            ));
        }

        self.store.remove(id);
        tracing::info!(activity_id = id, owner_id = caller, "Activity deleted");
        Ok(())
    }
}
