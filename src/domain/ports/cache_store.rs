use crate::domain::entities::{Holiday, MonthWorkingDays, TenantCalendarConfig};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const NAMESPACE: &str = "working_days";

/// Typed cache keys; each kind lives under its own prefix so entries never collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Month { tenant_id: Uuid, year: i32, month: u32 },
    Settings { tenant_id: Uuid },
    Holidays { tenant_id: Uuid, year: i32, month: u32 },
}

impl CacheKey {
    pub fn kind(&self) -> &'static str {
        match self {
            CacheKey::Month { .. } => "month",
            CacheKey::Settings { .. } => "settings",
            CacheKey::Holidays { .. } => "holidays",
        }
    }

    /// Prefixes covering every entry stored for a tenant
    pub fn tenant_prefixes(tenant_id: Uuid) -> [String; 3] {
        ["month", "settings", "holidays"].map(|kind| format!("{NAMESPACE}:{kind}:{tenant_id}"))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Month {
                tenant_id,
                year,
                month,
            }
            | CacheKey::Holidays {
                tenant_id,
                year,
                month,
            } => write!(f, "{NAMESPACE}:{}:{tenant_id}:{year}:{month}", self.kind()),
            CacheKey::Settings { tenant_id } => {
                write!(f, "{NAMESPACE}:{}:{tenant_id}", self.kind())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Month(MonthWorkingDays),
    Settings(TenantCalendarConfig),
    Holidays(Arc<Vec<Holiday>>),
}

/// Key/value store with per-entry expiration
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Live entry for the key, `None` when absent or expired
    async fn get(&self, key: &str) -> Option<CachedValue>;

    async fn set(&self, key: &str, value: CachedValue, ttl: Duration);

    /// Remove every entry whose key starts with `prefix`, returning how many went
    async fn remove_prefix(&self, prefix: &str) -> usize;
}
