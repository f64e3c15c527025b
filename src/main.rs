// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rowing Activities API Server
//!
//! Publishes club trainings and competitions and matches rowers to the
//! ones they are eligible to join.

use rowing_activities::{
    config::Config,
    db::ActivityStore,
    eligibility::{EligibilityChain, SystemClock},
    services::ActivityService,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Rowing Activities API");

    let utc_offset = config.utc_offset()?;
    tracing::info!(offset = %utc_offset, "Activity times interpreted in fixed offset");

    let chain = EligibilityChain::new(Arc::new(SystemClock), utc_offset);
    let activity_service = ActivityService::new(ActivityStore::new(), chain);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        activity_service,
    });

    // Build router
    let app = rowing_activities::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rowing_activities=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
