use crate::domain::entities::TenantSettings;
use crate::domain::errors::DomainResult;
use uuid::Uuid;

/// Repository for per-tenant calendar settings
#[async_trait::async_trait]
pub trait TenantSettingsRepository: Send + Sync {
    /// `None` when the tenant has never stored settings
    async fn get_by_tenant(&self, tenant_id: Uuid) -> DomainResult<Option<TenantSettings>>;

    async fn upsert(&self, settings: &TenantSettings) -> DomainResult<()>;
}
