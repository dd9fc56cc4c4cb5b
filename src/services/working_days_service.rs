use crate::domain::entities::{Holiday, MonthWorkingDays, TenantCalendarConfig};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::cache_store::{CacheKey, CacheStore, CachedValue};
use crate::domain::ports::holiday_repository::HolidayRepository;
use crate::domain::ports::tenant_settings_repository::TenantSettingsRepository;
use crate::domain::services::working_days_calendar::{self, month_bounds, next_month};
use crate::infrastructure::observability::{
    CACHE_HITS_TOTAL, CACHE_MISSES_TOTAL, MONTH_COMPUTATIONS_TOTAL,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Lifetime of every cached month result, settings lookup and holiday lookup
pub const CACHE_DURATION: Duration = Duration::from_secs(30 * 60);

/// Utilization applied when a caller does not ask for a specific one
pub const FULL_UTILIZATION: Decimal = Decimal::ONE;

/// Upper bound on the range buffer reserved up front; longer ranges grow as they go
const MAX_PREALLOCATED_MONTHS: u32 = 120;

/// Working days and available hours per tenant month, cache-first.
///
/// Month results, tenant calendar settings and the holidays of a month are
/// cached independently under the same TTL. Two callers racing on a cold key
/// both compute and the last write wins; the result is the same either way.
#[derive(Clone)]
pub struct WorkingDaysService {
    settings_repo: Arc<dyn TenantSettingsRepository>,
    holiday_repo: Arc<dyn HolidayRepository>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl WorkingDaysService {
    pub fn new(
        settings_repo: Arc<dyn TenantSettingsRepository>,
        holiday_repo: Arc<dyn HolidayRepository>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            settings_repo,
            holiday_repo,
            cache,
            ttl: CACHE_DURATION,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub async fn calculate_month(
        &self,
        tenant_id: Uuid,
        year: i32,
        month: u32,
    ) -> DomainResult<MonthWorkingDays> {
        month_bounds(year, month)?;

        let key = CacheKey::Month {
            tenant_id,
            year,
            month,
        };
        if let Some(CachedValue::Month(cached)) = self.cache.get(&key.to_string()).await {
            record_cache_hit(&key);
            return Ok(cached);
        }
        record_cache_miss(&key);

        let config = self.tenant_config(tenant_id).await?;
        let holidays = self.holidays_for_month(tenant_id, year, month).await?;
        let result = working_days_calendar::calculate_month(&config, year, month, &holidays)?;

        metrics::counter!(MONTH_COMPUTATIONS_TOTAL).increment(1);
        tracing::debug!(
            "Computed working days for tenant {} {}-{:02}: {} net days, {} hours",
            tenant_id,
            year,
            month,
            result.net_working_days,
            result.available_hours
        );

        self.cache
            .set(&key.to_string(), CachedValue::Month(result), self.ttl)
            .await;

        Ok(result)
    }

    /// `month_count` consecutive months starting at `(start_year, start_month)`, in order
    pub async fn calculate_month_range(
        &self,
        tenant_id: Uuid,
        start_year: i32,
        start_month: u32,
        month_count: u32,
    ) -> DomainResult<Vec<MonthWorkingDays>> {
        if !(1..=12).contains(&start_month) {
            return Err(DomainError::InvalidArgument(format!(
                "Start month must be between 1 and 12, got {}",
                start_month
            )));
        }

        let mut results = Vec::with_capacity(month_count.min(MAX_PREALLOCATED_MONTHS) as usize);
        let (mut year, mut month) = (start_year, start_month);

        for _ in 0..month_count {
            results.push(self.calculate_month(tenant_id, year, month).await?);
            (year, month) = next_month(year, month);
        }

        Ok(results)
    }

    pub async fn get_available_hours(
        &self,
        tenant_id: Uuid,
        year: i32,
        month: u32,
    ) -> DomainResult<Decimal> {
        let month_data = self.calculate_month(tenant_id, year, month).await?;
        Ok(month_data.available_hours)
    }

    /// Available hours scaled by `utilization_percent` (1.0 = 100%), rounded to 2 places
    pub async fn calculate_forecast_hours(
        &self,
        tenant_id: Uuid,
        year: i32,
        month: u32,
        utilization_percent: Decimal,
    ) -> DomainResult<Decimal> {
        let available = self.get_available_hours(tenant_id, year, month).await?;
        Ok(working_days_calendar::round_hours(
            available * utilization_percent,
        ))
    }

    /// Drop every cached entry of the tenant so the next read sees fresh settings and holidays
    pub async fn invalidate_tenant(&self, tenant_id: Uuid) {
        let mut removed = 0;
        for prefix in CacheKey::tenant_prefixes(tenant_id) {
            removed += self.cache.remove_prefix(&prefix).await;
        }
        tracing::debug!(
            "Invalidated {} cached working-day entries for tenant {}",
            removed,
            tenant_id
        );
    }

    async fn tenant_config(&self, tenant_id: Uuid) -> DomainResult<TenantCalendarConfig> {
        let key = CacheKey::Settings { tenant_id };
        if let Some(CachedValue::Settings(config)) = self.cache.get(&key.to_string()).await {
            record_cache_hit(&key);
            return Ok(config);
        }
        record_cache_miss(&key);

        let settings = self.settings_repo.get_by_tenant(tenant_id).await?;
        if settings.is_none() {
            tracing::debug!("No calendar settings for tenant {}, using defaults", tenant_id);
        }
        let config = TenantCalendarConfig::resolve(settings.as_ref());

        self.cache
            .set(&key.to_string(), CachedValue::Settings(config), self.ttl)
            .await;

        Ok(config)
    }

    async fn holidays_for_month(
        &self,
        tenant_id: Uuid,
        year: i32,
        month: u32,
    ) -> DomainResult<Arc<Vec<Holiday>>> {
        let key = CacheKey::Holidays {
            tenant_id,
            year,
            month,
        };
        if let Some(CachedValue::Holidays(holidays)) = self.cache.get(&key.to_string()).await {
            record_cache_hit(&key);
            return Ok(holidays);
        }
        record_cache_miss(&key);

        let (first, last) = month_bounds(year, month)?;
        let holidays: Vec<Holiday> = self
            .holiday_repo
            .list_forecast_holidays(tenant_id, first, last)
            .await?
            .into_iter()
            .filter(Holiday::counts_toward_forecast)
            .collect();
        let holidays = Arc::new(holidays);

        self.cache
            .set(
                &key.to_string(),
                CachedValue::Holidays(holidays.clone()),
                self.ttl,
            )
            .await;

        Ok(holidays)
    }
}

fn record_cache_hit(key: &CacheKey) {
    metrics::counter!(CACHE_HITS_TOTAL, "kind" => key.kind()).increment(1);
}

fn record_cache_miss(key: &CacheKey) {
    metrics::counter!(CACHE_MISSES_TOTAL, "kind" => key.kind()).increment(1);
}
