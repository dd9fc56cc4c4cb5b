//! Pure working-days arithmetic for a single calendar month.
//!
//! Nothing here touches storage or caching: given a tenant calendar config and
//! the holidays dated in the month, the breakdown is fully determined.

use crate::domain::entities::{Holiday, MonthWorkingDays, TenantCalendarConfig};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding used for PTO days and forecast hours: x.5 goes away from zero
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// First and last day of the month
pub fn month_bounds(year: i32, month: u32) -> DomainResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidArgument(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DomainError::InvalidArgument(format!("Year {} is out of range", year))
    })?;
    let (next_year, next_month) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::InvalidArgument(format!("Year {} is out of range", year)))?;

    Ok((first, last))
}

/// Month following `(year, month)`, rolling into January of the next year
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn is_excluded_weekend(config: &TenantCalendarConfig, date: NaiveDate) -> bool {
    match date.weekday() {
        Weekday::Sat => config.exclude_saturdays,
        Weekday::Sun => config.exclude_sundays,
        _ => false,
    }
}

/// PTO days as whole days, the way they are subtracted from business days
pub fn rounded_pto_days(pto_days: Decimal) -> Decimal {
    pto_days.round_dp_with_strategy(0, ROUNDING)
}

/// Hours rounded to two decimal places
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, ROUNDING)
}

/// Working-days breakdown for `(year, month)`.
///
/// `holidays` may contain entries outside the month or ones that do not count
/// toward forecasts; both are ignored. A holiday on an excluded weekend day is
/// not counted, so it never subtracts twice.
pub fn calculate_month(
    config: &TenantCalendarConfig,
    year: i32,
    month: u32,
    holidays: &[Holiday],
) -> DomainResult<MonthWorkingDays> {
    let (first, last) = month_bounds(year, month)?;

    let mut weekends = 0u32;
    let mut business_days = 0u32;
    for date in first.iter_days().take_while(|d| *d <= last) {
        if is_excluded_weekend(config, date) {
            weekends += 1;
        } else {
            business_days += 1;
        }
    }

    let weekday_holidays = holidays
        .iter()
        .filter(|h| h.counts_toward_forecast())
        .filter(|h| h.date >= first && h.date <= last)
        .filter(|h| !is_excluded_weekend(config, h.date))
        .count() as u32;

    let net = Decimal::from(business_days)
        - Decimal::from(weekday_holidays)
        - rounded_pto_days(config.default_pto_days_per_month);
    let net_working_days = net.max(Decimal::ZERO).to_u32().unwrap_or(0);

    let available_hours = Decimal::from(net_working_days) * config.standard_hours_per_day;

    Ok(MonthWorkingDays {
        year,
        month,
        total_days: last.day(),
        business_days,
        weekends,
        holidays: weekday_holidays,
        pto_days: config.default_pto_days_per_month,
        net_working_days,
        available_hours,
    })
}
