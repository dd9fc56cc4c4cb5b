use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::{require_tenant, AppState};
use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    // Tenant-scoped routes (require X-Tenant-Id)
    let tenant_scoped = Router::new()
        .route(
            "/api/working-days/month/:year/:month",
            get(controllers::working_days::get_month_working_days),
        )
        .route(
            "/api/working-days/month/:year/:month/hours",
            get(controllers::working_days::get_month_available_hours),
        )
        .route(
            "/api/working-days/month/:year/:month/forecast",
            get(controllers::working_days::get_forecast_hours),
        )
        .route(
            "/api/working-days/range",
            get(controllers::working_days::get_month_range_working_days),
        )
        .route(
            "/api/tenant-settings/calendar",
            get(controllers::tenant_settings::get_calendar_settings)
                .put(controllers::tenant_settings::update_calendar_settings),
        )
        .route(
            "/api/holidays",
            get(controllers::holidays::list_holidays).post(controllers::holidays::create_holiday),
        )
        .route(
            "/api/holidays/:id",
            get(controllers::holidays::get_holiday)
                .put(controllers::holidays::update_holiday)
                .delete(controllers::holidays::delete_holiday),
        )
        .layer(middleware::from_fn(require_tenant));

    Router::new()
        .route("/health", get(controllers::health::health))
        .merge(tenant_scoped)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
