use crate::domain::entities::{CreateHolidayRequest, Holiday, HolidayFilter, UpdateHolidayRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::holiday_repository::HolidayRepository;
use crate::services::WorkingDaysService;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct HolidayService {
    holiday_repo: Arc<dyn HolidayRepository>,
    working_days: WorkingDaysService,
}

impl HolidayService {
    pub fn new(holiday_repo: Arc<dyn HolidayRepository>, working_days: WorkingDaysService) -> Self {
        Self {
            holiday_repo,
            working_days,
        }
    }

    pub async fn list(&self, tenant_id: Uuid, filter: &HolidayFilter) -> DomainResult<Vec<Holiday>> {
        self.holiday_repo.list_holidays(tenant_id, filter).await
    }

    pub async fn get(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<Holiday> {
        self.holiday_repo
            .get_holiday(tenant_id, id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Holiday {} not found", id)))
    }

    pub async fn create(
        &self,
        tenant_id: Uuid,
        request: CreateHolidayRequest,
    ) -> DomainResult<Holiday> {
        let name = validate_name(&request.name)?;

        let mut holiday = Holiday::new(tenant_id, name, request.date, request.holiday_type);
        holiday.is_recurring = request.is_recurring;
        holiday.description = request.description;
        holiday.is_active = request.is_active.unwrap_or(true);
        holiday.is_observed = request.is_observed.unwrap_or(true);
        holiday.auto_apply_to_forecast = request.auto_apply_to_forecast.unwrap_or(true);

        self.holiday_repo.create_holiday(&holiday).await?;
        self.working_days.invalidate_tenant(tenant_id).await;

        tracing::info!(
            "Created holiday {} ({}) on {} for tenant {}",
            holiday.id,
            holiday.name,
            holiday.date,
            tenant_id
        );

        Ok(holiday)
    }

    pub async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        request: UpdateHolidayRequest,
    ) -> DomainResult<Holiday> {
        let mut holiday = self.get(tenant_id, id).await?;

        if let Some(name) = request.name {
            holiday.name = validate_name(&name)?;
        }
        if let Some(date) = request.date {
            holiday.date = date;
        }
        if let Some(holiday_type) = request.holiday_type {
            holiday.holiday_type = holiday_type;
        }
        if let Some(is_recurring) = request.is_recurring {
            holiday.is_recurring = is_recurring;
        }
        if let Some(description) = request.description {
            holiday.description = description;
        }
        if let Some(is_active) = request.is_active {
            holiday.is_active = is_active;
        }
        if let Some(is_observed) = request.is_observed {
            holiday.is_observed = is_observed;
        }
        if let Some(auto_apply) = request.auto_apply_to_forecast {
            holiday.auto_apply_to_forecast = auto_apply;
        }
        holiday.updated_at = chrono::Utc::now().to_rfc3339();

        self.holiday_repo.update_holiday(&holiday).await?;
        self.working_days.invalidate_tenant(tenant_id).await;

        tracing::info!("Updated holiday {} for tenant {}", id, tenant_id);

        Ok(holiday)
    }

    pub async fn delete(&self, tenant_id: Uuid, id: Uuid) -> DomainResult<()> {
        if !self.holiday_repo.delete_holiday(tenant_id, id).await? {
            return Err(DomainError::NotFound(format!("Holiday {} not found", id)));
        }
        self.working_days.invalidate_tenant(tenant_id).await;

        tracing::info!("Deleted holiday {} for tenant {}", id, tenant_id);

        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidArgument(
            "Holiday name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}
