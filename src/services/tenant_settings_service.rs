use crate::domain::entities::{TenantSettings, UpdateCalendarSettingsRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::tenant_settings_repository::TenantSettingsRepository;
use crate::services::WorkingDaysService;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);
const MAX_PTO_DAYS_PER_MONTH: Decimal = Decimal::from_parts(31, 0, 0, false, 0);

#[derive(Clone)]
pub struct TenantSettingsService {
    settings_repo: Arc<dyn TenantSettingsRepository>,
    working_days: WorkingDaysService,
}

impl TenantSettingsService {
    pub fn new(
        settings_repo: Arc<dyn TenantSettingsRepository>,
        working_days: WorkingDaysService,
    ) -> Self {
        Self {
            settings_repo,
            working_days,
        }
    }

    /// Stored settings, or the defaults a tenant starts with
    pub async fn get_calendar_settings(&self, tenant_id: Uuid) -> DomainResult<TenantSettings> {
        Ok(self
            .settings_repo
            .get_by_tenant(tenant_id)
            .await?
            .unwrap_or_else(|| TenantSettings::defaults_for(tenant_id)))
    }

    pub async fn update_calendar_settings(
        &self,
        tenant_id: Uuid,
        request: UpdateCalendarSettingsRequest,
    ) -> DomainResult<TenantSettings> {
        let mut settings = self.get_calendar_settings(tenant_id).await?;

        if let Some(exclude) = request.exclude_saturdays {
            settings.exclude_saturdays = exclude;
        }
        if let Some(exclude) = request.exclude_sundays {
            settings.exclude_sundays = exclude;
        }
        if let Some(hours) = request.standard_hours_per_day {
            if hours <= Decimal::ZERO || hours > MAX_HOURS_PER_DAY {
                return Err(DomainError::InvalidArgument(
                    "Standard hours per day must be greater than 0 and at most 24".to_string(),
                ));
            }
            settings.standard_hours_per_day = hours;
        }
        if let Some(pto) = request.default_pto_days_per_month {
            if pto < Decimal::ZERO || pto > MAX_PTO_DAYS_PER_MONTH {
                return Err(DomainError::InvalidArgument(
                    "Default PTO days per month must be between 0 and 31".to_string(),
                ));
            }
            settings.default_pto_days_per_month = pto;
        }
        if let Some(month) = request.fiscal_year_start_month {
            if !(1..=12).contains(&month) {
                return Err(DomainError::InvalidArgument(
                    "Fiscal year start month must be between 1 and 12".to_string(),
                ));
            }
            settings.fiscal_year_start_month = month;
        }
        settings.updated_at = chrono::Utc::now().to_rfc3339();

        self.settings_repo.upsert(&settings).await?;
        self.working_days.invalidate_tenant(tenant_id).await;

        Ok(settings)
    }
}
