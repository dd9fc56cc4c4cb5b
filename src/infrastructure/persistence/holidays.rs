use super::{corrupt_column, Database};
use crate::domain::entities::{Holiday, HolidayFilter, HolidayType};
use crate::domain::errors::DomainResult;
use crate::domain::ports::holiday_repository::HolidayRepository;
use chrono::NaiveDate;
use sqlx::{any::AnyRow, Row};
use uuid::Uuid;

const HOLIDAY_COLUMNS: &str = "id, tenant_id, name, holiday_date, holiday_type, is_recurring, \
     description, is_active, is_observed, auto_apply_to_forecast, created_at, updated_at";

fn parse_uuid(column: &str, value: String) -> DomainResult<Uuid> {
    Uuid::parse_str(&value).map_err(|_| corrupt_column(column, &value))
}

fn holiday_from_row(row: &AnyRow) -> DomainResult<Holiday> {
    let date: String = row.try_get("holiday_date")?;
    let holiday_type: String = row.try_get("holiday_type")?;

    Ok(Holiday {
        id: parse_uuid("id", row.try_get("id")?)?,
        tenant_id: parse_uuid("tenant_id", row.try_get("tenant_id")?)?,
        name: row.try_get("name")?,
        date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| corrupt_column("holiday_date", &date))?,
        holiday_type: holiday_type
            .parse::<HolidayType>()
            .map_err(|_| corrupt_column("holiday_type", &holiday_type))?,
        is_recurring: row.try_get("is_recurring")?,
        description: row
            .try_get::<Option<String>, _>("description")
            .ok()
            .flatten(),
        is_active: row.try_get("is_active")?,
        is_observed: row.try_get("is_observed")?,
        auto_apply_to_forecast: row.try_get("auto_apply_to_forecast")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn date_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[async_trait::async_trait]
impl HolidayRepository for Database {
    async fn list_forecast_holidays(
        &self,
        tenant_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Holiday>> {
        let rows = sqlx::query(&format!(
            "SELECT {HOLIDAY_COLUMNS} FROM holidays
             WHERE tenant_id = ?
               AND is_active = 1 AND is_observed = 1 AND auto_apply_to_forecast = 1
               AND holiday_date >= ? AND holiday_date <= ?
             ORDER BY holiday_date ASC"
        ))
        .bind(tenant_id.to_string())
        .bind(date_text(start))
        .bind(date_text(end))
        .fetch_all(&self.pool)
        .await?;

        let holidays = rows
            .iter()
            .map(holiday_from_row)
            .collect::<DomainResult<Vec<_>>>()?;

        tracing::debug!(
            "Loaded {} forecast holidays for tenant {} between {} and {}",
            holidays.len(),
            tenant_id,
            start,
            end
        );

        Ok(holidays)
    }

    async fn list_holidays(
        &self,
        tenant_id: Uuid,
        filter: &HolidayFilter,
    ) -> DomainResult<Vec<Holiday>> {
        let year_start = filter.year.map(|y| format!("{:04}-01-01", y));
        let year_end = filter.year.map(|y| format!("{:04}-12-31", y));
        let holiday_type = filter.holiday_type.map(|t| t.to_string());
        let is_observed = filter.is_observed.map(i64::from);

        let rows = sqlx::query(&format!(
            "SELECT {HOLIDAY_COLUMNS} FROM holidays
             WHERE tenant_id = ?
               AND (? IS NULL OR holiday_date >= ?)
               AND (? IS NULL OR holiday_date <= ?)
               AND (? IS NULL OR holiday_type = ?)
               AND (? IS NULL OR is_observed = ?)
             ORDER BY holiday_date ASC, name ASC"
        ))
        .bind(tenant_id.to_string())
        .bind(year_start.clone())
        .bind(year_start)
        .bind(year_end.clone())
        .bind(year_end)
        .bind(holiday_type.clone())
        .bind(holiday_type)
        .bind(is_observed)
        .bind(is_observed)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(holiday_from_row).collect()
    }

    async fn get_holiday(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Option<Holiday>> {
        let row = sqlx::query(&format!(
            "SELECT {HOLIDAY_COLUMNS} FROM holidays WHERE id = ? AND tenant_id = ?"
        ))
        .bind(id.to_string())
        .bind(tenant_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(holiday_from_row).transpose()
    }

    async fn create_holiday(&self, holiday: &Holiday) -> DomainResult<()> {
        sqlx::query(&format!(
            "INSERT INTO holidays ({HOLIDAY_COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(holiday.id.to_string())
        .bind(holiday.tenant_id.to_string())
        .bind(&holiday.name)
        .bind(date_text(holiday.date))
        .bind(holiday.holiday_type.to_string())
        .bind(holiday.is_recurring)
        .bind(holiday.description.clone())
        .bind(holiday.is_active)
        .bind(holiday.is_observed)
        .bind(holiday.auto_apply_to_forecast)
        .bind(&holiday.created_at)
        .bind(&holiday.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_holiday(&self, holiday: &Holiday) -> DomainResult<()> {
        sqlx::query(
            "UPDATE holidays
             SET name = ?, holiday_date = ?, holiday_type = ?, is_recurring = ?, description = ?,
                 is_active = ?, is_observed = ?, auto_apply_to_forecast = ?, updated_at = ?
             WHERE id = ? AND tenant_id = ?",
        )
        .bind(&holiday.name)
        .bind(date_text(holiday.date))
        .bind(holiday.holiday_type.to_string())
        .bind(holiday.is_recurring)
        .bind(holiday.description.clone())
        .bind(holiday.is_active)
        .bind(holiday.is_observed)
        .bind(holiday.auto_apply_to_forecast)
        .bind(&holiday.updated_at)
        .bind(holiday.id.to_string())
        .bind(holiday.tenant_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_holiday(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = ? AND tenant_id = ?")
            .bind(id.to_string())
            .bind(tenant_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
