use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Working-days breakdown for one calendar month of one tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthWorkingDays {
    pub year: i32,
    pub month: u32,
    pub total_days: u32,
    pub business_days: u32,
    pub weekends: u32,
    /// Holidays falling on business days only
    pub holidays: u32,
    pub pto_days: Decimal,
    pub net_working_days: u32,
    pub available_hours: Decimal,
}

/// Response body for the available-hours endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableHoursResponse {
    pub year: i32,
    pub month: u32,
    pub available_hours: Decimal,
}

/// Response body for the forecast-hours endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastHoursResponse {
    pub year: i32,
    pub month: u32,
    pub utilization_percent: Decimal,
    pub forecast_hours: Decimal,
}
