pub mod cache_store;
pub mod clock;
pub mod holiday_repository;
pub mod tenant_settings_repository;

pub use cache_store::{CacheKey, CacheStore, CachedValue};
pub use clock::Clock;
pub use holiday_repository::HolidayRepository;
pub use tenant_settings_repository::TenantSettingsRepository;
