use super::CacheMetrics;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tolldns_application::ports::AnswerCache;
use tolldns_domain::{Answer, DomainError, Name};
use tracing::{debug, info};

/// Process-wide name -> answer store.
///
/// One mutex covers the whole map: every read and write is serialized, so
/// concurrent writers to the same name leave whichever value was written
/// last and writes to distinct names are never lost. Entries never expire;
/// `ttl` is carried but not enforced.
pub struct ResolutionCache {
    entries: Mutex<HashMap<Name, Answer>>,
    metrics: CacheMetrics,
}

impl ResolutionCache {
    pub fn new() -> Self {
        info!("Initializing resolution cache");
        Self {
            entries: Mutex::new(HashMap::new()),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn get(&self, name: &Name) -> Option<Answer> {
        let found = self.lock().get(name).cloned();
        let counter = if found.is_some() {
            &self.metrics.hits
        } else {
            &self.metrics.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn put(&self, name: Name, answer: Answer) {
        let previous = self.lock().insert(name.clone(), answer);
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);
        if previous.is_some() {
            self.metrics.overwrites.fetch_add(1, Ordering::Relaxed);
        }
        debug!(name = %name, replaced = previous.is_some(), "Cache entry stored");
    }

    pub fn size(&self) -> usize {
        self.lock().len()
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    // A panic while holding the lock cannot leave the map half-written
    // (single insert/get per critical section), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, HashMap<Name, Answer>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerCache for ResolutionCache {
    async fn get(&self, name: &Name) -> Result<Option<Answer>, DomainError> {
        Ok(ResolutionCache::get(self, name))
    }

    async fn put(&self, name: &Name, answer: Answer) -> Result<(), DomainError> {
        ResolutionCache::put(self, name.clone(), answer);
        Ok(())
    }
}
