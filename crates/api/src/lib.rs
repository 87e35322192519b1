//! HTTP API layer exposing report filter schemas.
//!
//! This crate provides:
//! - REST API routes
//! - Shared application state
//! - Error responses

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use timesheet_core::clock::{Clock, SystemClock};
use timesheet_core::i18n::{CatalogLocalizer, IdentityLocalizer, Localizer};
use timesheet_core::reports::ReportRegistry;
use timesheet_shared::{AppConfig, AppResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registered reports.
    pub registry: Arc<ReportRegistry>,
    /// Source of "today" for filter defaults.
    pub clock: Arc<dyn Clock>,
    /// Label translator.
    pub localizer: Arc<dyn Localizer>,
}

impl AppState {
    /// Creates state from its parts.
    pub fn new(
        registry: ReportRegistry,
        clock: Arc<dyn Clock>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            clock,
            localizer,
        }
    }

    /// Builds state from configuration, with every built-in report registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is unknown or the translation catalog
    /// cannot be loaded.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let clock = SystemClock::from_timezone_name(&config.clock.timezone)?;
        info!(timezone = %config.clock.timezone, "Clock configured");

        let localizer: Arc<dyn Localizer> = match &config.i18n.catalog_path {
            Some(path) => {
                let catalog = CatalogLocalizer::from_file(path)?.strict(config.i18n.strict);
                info!(
                    path = %path,
                    labels = catalog.len(),
                    strict = config.i18n.strict,
                    "Translation catalog loaded"
                );
                Arc::new(catalog)
            }
            None => Arc::new(IdentityLocalizer),
        };

        Ok(Self::new(
            ReportRegistry::with_defaults(),
            Arc::new(clock),
            localizer,
        ))
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
