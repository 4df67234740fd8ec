//! Memoization of loaded profiles.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use capset_model::CapabilityDescriptor;
use tokio::sync::Mutex;
use tracing::debug;

/// Profiles keyed by descriptor, shared as `Arc`s.
///
/// Owned by whoever needs the memoization; there is no process-wide
/// instance.
#[derive(Debug)]
pub struct ProfileCache<P> {
    entries: Mutex<HashMap<CapabilityDescriptor, Arc<P>>>,
}

impl<P> Default for ProfileCache<P> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<P> ProfileCache<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, descriptor: &CapabilityDescriptor) -> Option<Arc<P>> {
        self.entries.lock().await.get(descriptor).cloned()
    }

    /// Stores `profile`, replacing and returning any previous entry.
    pub async fn insert(&self, descriptor: CapabilityDescriptor, profile: P) -> Option<Arc<P>> {
        self.entries.lock().await.insert(descriptor, Arc::new(profile))
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Returns the cached profile, or runs `loader` and caches its result.
    ///
    /// The lock is not held while loading, so concurrent misses on one
    /// descriptor may each load; the first stored value wins and every
    /// caller gets that one. Loader errors are returned and nothing is
    /// cached.
    pub async fn get_or_load<F, Fut, E>(
        &self,
        descriptor: &CapabilityDescriptor,
        loader: F,
    ) -> Result<Arc<P>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<P, E>>,
    {
        if let Some(hit) = self.get(descriptor).await {
            debug!(%descriptor, "profile cache hit");
            return Ok(hit);
        }

        debug!(%descriptor, "profile cache miss");
        let loaded = loader().await?;
        let mut entries = self.entries.lock().await;
        Ok(Arc::clone(
            entries
                .entry(descriptor.clone())
                .or_insert_with(|| Arc::new(loaded)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capset_model::Version;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn net(minor: u32) -> CapabilityDescriptor {
        CapabilityDescriptor::unprofiled("Net", Version::new(4, minor)).unwrap()
    }

    #[tokio::test]
    async fn repeated_loads_share_one_arc() {
        let cache = ProfileCache::new();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let load = || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(vec!["System.Object".to_string()])
        };

        let a = cache.get_or_load(&net(0), load).await.unwrap();
        let b = cache.get_or_load(&net(0), load).await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn failed_loads_are_not_cached() {
        let cache: ProfileCache<String> = ProfileCache::new();
        let err = cache
            .get_or_load(&net(5), || async { Err::<String, _>("offline") })
            .await
            .unwrap_err();
        assert_eq!(err, "offline");
        assert!(cache.is_empty().await);

        let ok = cache
            .get_or_load(&net(5), || async { Ok::<_, &str>("loaded".to_string()) })
            .await
            .unwrap();
        assert_eq!(ok.as_str(), "loaded");
    }

    #[tokio::test]
    async fn insert_replaces_and_clear_empties() {
        let cache = ProfileCache::new();
        assert!(cache.insert(net(0), 1).await.is_none());
        let old = cache.insert(net(0), 2).await.unwrap();
        assert_eq!(*old, 1);
        assert_eq!(*cache.get(&net(0)).await.unwrap(), 2);
        cache.clear().await;
        assert!(cache.get(&net(0)).await.is_none());
    }
}
