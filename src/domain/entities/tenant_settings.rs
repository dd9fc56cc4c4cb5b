use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_STANDARD_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
pub const DEFAULT_PTO_DAYS_PER_MONTH: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// October, start of the federal fiscal year
pub const DEFAULT_FISCAL_YEAR_START_MONTH: u32 = 10;

/// Stored calendar settings row for a tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettings {
    pub tenant_id: Uuid,
    pub exclude_saturdays: bool,
    pub exclude_sundays: bool,
    pub standard_hours_per_day: Decimal,
    pub default_pto_days_per_month: Decimal,
    pub fiscal_year_start_month: u32,
    pub updated_at: String,
}

impl TenantSettings {
    /// Settings a tenant gets before anything has been stored for it
    pub fn defaults_for(tenant_id: Uuid) -> Self {
        let config = TenantCalendarConfig::default();
        Self {
            tenant_id,
            exclude_saturdays: config.exclude_saturdays,
            exclude_sundays: config.exclude_sundays,
            standard_hours_per_day: config.standard_hours_per_day,
            default_pto_days_per_month: config.default_pto_days_per_month,
            fiscal_year_start_month: DEFAULT_FISCAL_YEAR_START_MONTH,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The slice of tenant settings the working-days calculation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantCalendarConfig {
    pub exclude_saturdays: bool,
    pub exclude_sundays: bool,
    pub standard_hours_per_day: Decimal,
    pub default_pto_days_per_month: Decimal,
}

impl Default for TenantCalendarConfig {
    fn default() -> Self {
        Self {
            exclude_saturdays: true,
            exclude_sundays: true,
            standard_hours_per_day: DEFAULT_STANDARD_HOURS_PER_DAY,
            default_pto_days_per_month: DEFAULT_PTO_DAYS_PER_MONTH,
        }
    }
}

impl TenantCalendarConfig {
    /// Stored settings when present, defaults otherwise
    pub fn resolve(settings: Option<&TenantSettings>) -> Self {
        settings.map(Self::from).unwrap_or_default()
    }
}

impl From<&TenantSettings> for TenantCalendarConfig {
    fn from(settings: &TenantSettings) -> Self {
        Self {
            exclude_saturdays: settings.exclude_saturdays,
            exclude_sundays: settings.exclude_sundays,
            standard_hours_per_day: settings.standard_hours_per_day,
            default_pto_days_per_month: settings.default_pto_days_per_month,
        }
    }
}

/// DTO for updating calendar settings; omitted fields keep their value
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendarSettingsRequest {
    pub exclude_saturdays: Option<bool>,
    pub exclude_sundays: Option<bool>,
    pub standard_hours_per_day: Option<Decimal>,
    pub default_pto_days_per_month: Option<Decimal>,
    pub fiscal_year_start_month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = TenantCalendarConfig::default();
        assert!(config.exclude_saturdays);
        assert!(config.exclude_sundays);
        assert_eq!(config.standard_hours_per_day, dec!(8));
        assert_eq!(config.default_pto_days_per_month, dec!(1.5));
    }

    #[test]
    fn test_resolve_without_settings_uses_defaults() {
        assert_eq!(
            TenantCalendarConfig::resolve(None),
            TenantCalendarConfig::default()
        );
    }

    #[test]
    fn test_resolve_prefers_stored_settings() {
        let mut settings = TenantSettings::defaults_for(Uuid::new_v4());
        settings.exclude_saturdays = false;
        settings.standard_hours_per_day = dec!(7.5);
        settings.default_pto_days_per_month = dec!(2);

        let config = TenantCalendarConfig::resolve(Some(&settings));
        assert!(!config.exclude_saturdays);
        assert!(config.exclude_sundays);
        assert_eq!(config.standard_hours_per_day, dec!(7.5));
        assert_eq!(config.default_pto_days_per_month, dec!(2));
    }

    #[test]
    fn test_default_row_starts_fiscal_year_in_october() {
        let settings = TenantSettings::defaults_for(Uuid::new_v4());
        assert_eq!(settings.fiscal_year_start_month, 10);
    }
}
