use crate::domain::ports::cache_store::{CacheStore, CachedValue};
use crate::domain::ports::clock::Clock;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Every this many writes, `set` also drops all expired entries
const SWEEP_EVERY_WRITES: u64 = 256;

struct Entry {
    value: CachedValue,
    expires_at: DateTime<Utc>,
}

fn retain_live(entries: &mut HashMap<String, Entry>, now: DateTime<Utc>) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| entry.expires_at > now);
    before - entries.len()
}

/// Process-local cache with per-entry expiration.
///
/// Expired entries are dropped lazily on read, swept in bulk every
/// `SWEEP_EVERY_WRITES` writes, or on demand through
/// [`InMemoryCache::purge_expired`]. Concurrent writers to the same key
/// simply overwrite each other.
#[derive(Clone)]
pub struct InMemoryCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    writes: Arc<AtomicU64>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            writes: Arc::new(AtomicU64::new(0)),
            clock,
        }
    }

    /// Number of stored entries, expired ones included until purged
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        retain_live(&mut *self.entries.write().await, now)
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get(&self, key: &str) -> Option<CachedValue> {
        let now = self.clock.now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: re-check under the write lock since a writer may have refreshed it
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            if entry.expires_at > now {
                return Some(entry.value.clone());
            }
            entries.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: CachedValue, ttl: Duration) {
        let now = self.clock.now();
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        let expires_at = now
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.entries.write().await;
        let writes = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        if writes % SWEEP_EVERY_WRITES == 0 {
            let removed = retain_live(&mut entries, now);
            if removed > 0 {
                tracing::debug!("Swept {} expired cache entries", removed);
            }
        }
        entries.insert(key.to_string(), Entry { value, expires_at });
    }

    async fn remove_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TenantCalendarConfig;
    use crate::infrastructure::runtime::ManualClock;

    const TTL: Duration = Duration::from_secs(30 * 60);

    fn setup() -> (ManualClock, InMemoryCache) {
        let clock = ManualClock::default();
        let cache = InMemoryCache::new(Arc::new(clock.clone()));
        (clock, cache)
    }

    fn settings_value() -> CachedValue {
        CachedValue::Settings(TenantCalendarConfig::default())
    }

    #[tokio::test]
    async fn test_get_returns_value_within_ttl() {
        let (clock, cache) = setup();
        cache.set("a", settings_value(), TTL).await;

        clock.advance(chrono::Duration::minutes(29));
        assert_eq!(cache.get("a").await, Some(settings_value()));
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let (clock, cache) = setup();
        cache.set("a", settings_value(), TTL).await;

        clock.advance(chrono::Duration::minutes(30));
        assert_eq!(cache.get("a").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_key() {
        let (_clock, cache) = setup();
        assert_eq!(cache.get("missing").await, None);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_refreshes_expiry() {
        let (clock, cache) = setup();
        cache.set("a", settings_value(), TTL).await;
        clock.advance(chrono::Duration::minutes(20));

        let updated = CachedValue::Settings(TenantCalendarConfig {
            exclude_sundays: false,
            ..Default::default()
        });
        cache.set("a", updated.clone(), TTL).await;
        clock.advance(chrono::Duration::minutes(20));

        assert_eq!(cache.get("a").await, Some(updated));
    }

    #[tokio::test]
    async fn test_remove_prefix() {
        let (_clock, cache) = setup();
        cache.set("working_days:month:t1:2025:1", settings_value(), TTL).await;
        cache.set("working_days:month:t1:2025:2", settings_value(), TTL).await;
        cache.set("working_days:month:t2:2025:1", settings_value(), TTL).await;

        assert_eq!(cache.remove_prefix("working_days:month:t1").await, 2);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("working_days:month:t2:2025:1").await.is_some());
    }

    #[tokio::test]
    async fn test_writes_sweep_expired_entries() {
        let (clock, cache) = setup();
        for i in 0..1000 {
            cache
                .set(&format!("old:{i}"), settings_value(), Duration::from_secs(60))
                .await;
        }

        clock.advance(chrono::Duration::days(1));
        for i in 0..1000 {
            cache.set(&format!("new:{i}"), settings_value(), TTL).await;
        }

        assert_eq!(cache.len().await, 1000);
        assert!(cache.get("new:0").await.is_some());
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_live_entries() {
        let (clock, cache) = setup();
        cache.set("short", settings_value(), Duration::from_secs(60)).await;
        cache.set("long", settings_value(), TTL).await;

        clock.advance(chrono::Duration::minutes(5));
        assert_eq!(cache.purge_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("long").await.is_some());
    }
}
