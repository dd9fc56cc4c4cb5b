use crate::config::Config;
use crate::domain::ports::cache_store::CacheStore;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::holiday_repository::HolidayRepository;
use crate::domain::ports::tenant_settings_repository::TenantSettingsRepository;
use crate::infrastructure::cache::InMemoryCache;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::runtime::SystemClock;
use crate::services::{HolidayService, TenantSettingsService, WorkingDaysService};
use std::sync::Arc;

pub fn build_app_state(db: Database, config: &Config) -> AppState {
    build_app_state_with_clock(db, config, Arc::new(SystemClock::new()))
}

/// Wire services over the database, with cache expiry driven by `clock`
pub fn build_app_state_with_clock(
    db: Database,
    config: &Config,
    clock: Arc<dyn Clock>,
) -> AppState {
    let settings_repo = Arc::new(db.clone()) as Arc<dyn TenantSettingsRepository>;
    let holiday_repo = Arc::new(db) as Arc<dyn HolidayRepository>;

    let cache = Arc::new(InMemoryCache::new(clock)) as Arc<dyn CacheStore>;
    tracing::info!(
        "Working-days cache initialized with {} minute TTL",
        config.cache_ttl_minutes
    );

    let working_days_service =
        WorkingDaysService::new(settings_repo.clone(), holiday_repo.clone(), cache)
            .with_ttl(config.cache_ttl());
    let holiday_service = HolidayService::new(holiday_repo, working_days_service.clone());
    let tenant_settings_service =
        TenantSettingsService::new(settings_repo, working_days_service.clone());

    AppState {
        working_days_service,
        holiday_service,
        tenant_settings_service,
    }
}
