use crate::domain::entities::{Holiday, HolidayFilter};
use crate::domain::errors::DomainResult;
use chrono::NaiveDate;
use uuid::Uuid;

/// Repository for tenant holiday calendars
#[async_trait::async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Holidays that reduce forecast capacity (active, observed, auto-applied)
    /// dated within `start..=end`
    async fn list_forecast_holidays(
        &self,
        tenant_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Holiday>>;

    /// All holidays of a tenant matching the filter, ordered by date
    async fn list_holidays(
        &self,
        tenant_id: Uuid,
        filter: &HolidayFilter,
    ) -> DomainResult<Vec<Holiday>>;

    async fn get_holiday(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<Holiday>>;

    async fn create_holiday(&self, holiday: &Holiday) -> DomainResult<()>;

    async fn update_holiday(&self, holiday: &Holiday) -> DomainResult<()>;

    /// Returns false when nothing was deleted
    async fn delete_holiday(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<bool>;
}
