use crate::{
    domain::entities::{CreateHolidayRequest, Holiday, HolidayFilter, UpdateHolidayRequest},
    infrastructure::http::{
        extract::{ApiJson, ApiPath, ApiQuery},
        middleware::{ApiResult, AppState, TenantContext},
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

/// GET /api/holidays - List the tenant's holidays
pub async fn list_holidays(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiQuery(filter): ApiQuery<HolidayFilter>,
) -> ApiResult<Json<Vec<Holiday>>> {
    let holidays = state
        .holiday_service
        .list(tenant.tenant_id, &filter)
        .await?;

    Ok(Json(holidays))
}

/// GET /api/holidays/:id
pub async fn get_holiday(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Holiday>> {
    let holiday = state.holiday_service.get(tenant.tenant_id, id).await?;
    Ok(Json(holiday))
}

/// POST /api/holidays
pub async fn create_holiday(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiJson(request): ApiJson<CreateHolidayRequest>,
) -> ApiResult<(StatusCode, Json<Holiday>)> {
    let holiday = state
        .holiday_service
        .create(tenant.tenant_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(holiday)))
}

/// PUT /api/holidays/:id
pub async fn update_holiday(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateHolidayRequest>,
) -> ApiResult<Json<Holiday>> {
    let holiday = state
        .holiday_service
        .update(tenant.tenant_id, id, request)
        .await?;

    Ok(Json(holiday))
}

/// DELETE /api/holidays/:id
pub async fn delete_holiday(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<StatusCode> {
    state.holiday_service.delete(tenant.tenant_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
