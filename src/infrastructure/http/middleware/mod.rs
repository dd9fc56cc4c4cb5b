pub mod error;
pub mod tenant;

pub use error::{ApiError, ApiResult};
pub use tenant::{require_tenant, TenantContext, TENANT_HEADER};

use crate::services::{HolidayService, TenantSettingsService, WorkingDaysService};

#[derive(Clone)]
pub struct AppState {
    pub working_days_service: WorkingDaysService,
    pub holiday_service: HolidayService,
    pub tenant_settings_service: TenantSettingsService,
}
