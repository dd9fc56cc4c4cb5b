use super::{corrupt_column, Database};
use crate::domain::entities::TenantSettings;
use crate::domain::errors::DomainResult;
use crate::domain::ports::tenant_settings_repository::TenantSettingsRepository;
use rust_decimal::Decimal;
use sqlx::Row;
use std::str::FromStr;
use uuid::Uuid;

fn parse_decimal(column: &str, value: String) -> DomainResult<Decimal> {
    Decimal::from_str(&value).map_err(|_| corrupt_column(column, &value))
}

#[async_trait::async_trait]
impl TenantSettingsRepository for Database {
    async fn get_by_tenant(&self, tenant_id: Uuid) -> DomainResult<Option<TenantSettings>> {
        let row = sqlx::query(
            "SELECT exclude_saturdays, exclude_sundays, standard_hours_per_day,
                    default_pto_days_per_month, fiscal_year_start_month, updated_at
             FROM tenant_settings WHERE tenant_id = ?",
        )
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let fiscal_year_start_month: i64 = row.try_get("fiscal_year_start_month")?;

        Ok(Some(TenantSettings {
            tenant_id,
            exclude_saturdays: row.try_get("exclude_saturdays")?,
            exclude_sundays: row.try_get("exclude_sundays")?,
            standard_hours_per_day: parse_decimal(
                "standard_hours_per_day",
                row.try_get("standard_hours_per_day")?,
            )?,
            default_pto_days_per_month: parse_decimal(
                "default_pto_days_per_month",
                row.try_get("default_pto_days_per_month")?,
            )?,
            fiscal_year_start_month: u32::try_from(fiscal_year_start_month).map_err(|_| {
                corrupt_column(
                    "fiscal_year_start_month",
                    &fiscal_year_start_month.to_string(),
                )
            })?,
            updated_at: row.try_get("updated_at")?,
        }))
    }

    async fn upsert(&self, settings: &TenantSettings) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO tenant_settings (tenant_id, exclude_saturdays, exclude_sundays,
                 standard_hours_per_day, default_pto_days_per_month, fiscal_year_start_month, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(tenant_id) DO UPDATE SET
                 exclude_saturdays = excluded.exclude_saturdays,
                 exclude_sundays = excluded.exclude_sundays,
                 standard_hours_per_day = excluded.standard_hours_per_day,
                 default_pto_days_per_month = excluded.default_pto_days_per_month,
                 fiscal_year_start_month = excluded.fiscal_year_start_month,
                 updated_at = excluded.updated_at",
        )
        .bind(settings.tenant_id.to_string())
        .bind(settings.exclude_saturdays)
        .bind(settings.exclude_sundays)
        .bind(settings.standard_hours_per_day.to_string())
        .bind(settings.default_pto_days_per_month.to_string())
        .bind(i64::from(settings.fiscal_year_start_month))
        .bind(&settings.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::info!("Calendar settings saved for tenant {}", settings.tenant_id);

        Ok(())
    }
}
