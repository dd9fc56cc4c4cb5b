use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;
use workdays::config::Config;
use workdays::domain::entities::{Holiday, HolidayType, TenantSettings};
use workdays::domain::ports::{HolidayRepository, TenantSettingsRepository};
use workdays::infrastructure::persistence::Database;

pub fn test_config() -> Config {
    Config {
        service_name: "workdays-test".to_string(),
        ..Config::default()
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Insert an auto-applied holiday straight into storage
pub async fn insert_holiday(db: &Database, tenant_id: Uuid, name: &str, on: NaiveDate) -> Holiday {
    let holiday = Holiday::new(tenant_id, name.to_string(), on, HolidayType::Company);
    db.create_holiday(&holiday)
        .await
        .expect("Failed to insert holiday");
    holiday
}

/// Store calendar settings for a tenant, weekends excluded
pub async fn store_settings(
    db: &Database,
    tenant_id: Uuid,
    hours_per_day: Decimal,
    pto_days: Decimal,
) -> TenantSettings {
    let mut settings = TenantSettings::defaults_for(tenant_id);
    settings.standard_hours_per_day = hours_per_day;
    settings.default_pto_days_per_month = pto_days;
    db.upsert(&settings)
        .await
        .expect("Failed to store tenant settings");
    settings
}
