use crate::{
    domain::entities::{TenantSettings, UpdateCalendarSettingsRequest},
    infrastructure::http::{
        extract::ApiJson,
        middleware::{ApiResult, AppState, TenantContext},
    },
};
use axum::{extract::State, Extension, Json};

/// GET /api/tenant-settings/calendar
pub async fn get_calendar_settings(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
) -> ApiResult<Json<TenantSettings>> {
    let settings = state
        .tenant_settings_service
        .get_calendar_settings(tenant.tenant_id)
        .await?;

    Ok(Json(settings))
}

/// PUT /api/tenant-settings/calendar
pub async fn update_calendar_settings(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiJson(request): ApiJson<UpdateCalendarSettingsRequest>,
) -> ApiResult<Json<TenantSettings>> {
    let settings = state
        .tenant_settings_service
        .update_calendar_settings(tenant.tenant_id, request)
        .await?;

    Ok(Json(settings))
}
