use crate::{
    domain::entities::{AvailableHoursResponse, ForecastHoursResponse, MonthWorkingDays},
    infrastructure::http::{
        extract::{ApiPath, ApiQuery},
        middleware::{ApiError, ApiResult, AppState, TenantContext},
    },
    services::FULL_UTILIZATION,
};
use axum::{extract::State, Extension, Json};
use rust_decimal::Decimal;
use serde::Deserialize;

const MIN_YEAR: i32 = 2000;
const MAX_YEAR: i32 = 2100;
const MAX_MONTH_COUNT: u32 = 36;
const DEFAULT_MONTH_COUNT: u32 = 12;
const MAX_UTILIZATION: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeParams {
    pub start_year: i32,
    pub start_month: u32,
    pub month_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParams {
    pub utilization_percent: Option<Decimal>,
}

fn validate_month(month: u32, label: &str) -> ApiResult<()> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::BadRequest(format!(
            "{} must be between 1 and 12",
            label
        )));
    }
    Ok(())
}

fn validate_year(year: i32, label: &str) -> ApiResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ApiError::BadRequest(format!(
            "{} must be between {} and {}",
            label, MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(())
}

/// GET /api/working-days/month/:year/:month - Working days breakdown for a month
pub async fn get_month_working_days(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiPath((year, month)): ApiPath<(i32, u32)>,
) -> ApiResult<Json<MonthWorkingDays>> {
    validate_month(month, "Month")?;
    validate_year(year, "Year")?;

    let result = state
        .working_days_service
        .calculate_month(tenant.tenant_id, year, month)
        .await?;

    Ok(Json(result))
}

/// GET /api/working-days/range - Working days for consecutive months
pub async fn get_month_range_working_days(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiQuery(params): ApiQuery<RangeParams>,
) -> ApiResult<Json<Vec<MonthWorkingDays>>> {
    let month_count = params.month_count.unwrap_or(DEFAULT_MONTH_COUNT);

    validate_month(params.start_month, "Start month")?;
    validate_year(params.start_year, "Start year")?;
    if !(1..=MAX_MONTH_COUNT).contains(&month_count) {
        return Err(ApiError::BadRequest(format!(
            "Month count must be between 1 and {}",
            MAX_MONTH_COUNT
        )));
    }

    let results = state
        .working_days_service
        .calculate_month_range(
            tenant.tenant_id,
            params.start_year,
            params.start_month,
            month_count,
        )
        .await?;

    Ok(Json(results))
}

/// GET /api/working-days/month/:year/:month/hours - Available hours for a month
pub async fn get_month_available_hours(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiPath((year, month)): ApiPath<(i32, u32)>,
) -> ApiResult<Json<AvailableHoursResponse>> {
    validate_month(month, "Month")?;
    validate_year(year, "Year")?;

    let available_hours = state
        .working_days_service
        .get_available_hours(tenant.tenant_id, year, month)
        .await?;

    Ok(Json(AvailableHoursResponse {
        year,
        month,
        available_hours,
    }))
}

/// GET /api/working-days/month/:year/:month/forecast - Recommended forecast hours
pub async fn get_forecast_hours(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    ApiPath((year, month)): ApiPath<(i32, u32)>,
    ApiQuery(params): ApiQuery<ForecastParams>,
) -> ApiResult<Json<ForecastHoursResponse>> {
    validate_month(month, "Month")?;
    validate_year(year, "Year")?;

    let utilization_percent = params.utilization_percent.unwrap_or(FULL_UTILIZATION);
    if utilization_percent <= Decimal::ZERO || utilization_percent > MAX_UTILIZATION {
        return Err(ApiError::BadRequest(
            "Utilization must be between 0 and 1.5 (150%)".to_string(),
        ));
    }

    let forecast_hours = state
        .working_days_service
        .calculate_forecast_hours(tenant.tenant_id, year, month, utilization_percent)
        .await?;

    Ok(Json(ForecastHoursResponse {
        year,
        month,
        utilization_percent,
        forecast_hours,
    }))
}
