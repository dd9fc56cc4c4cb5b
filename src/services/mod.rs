pub mod holiday_service;
pub mod tenant_settings_service;
pub mod working_days_service;

pub use holiday_service::HolidayService;
pub use tenant_settings_service::TenantSettingsService;
pub use working_days_service::{WorkingDaysService, CACHE_DURATION, FULL_UTILIZATION};
