//! In-process cache for the product list.
//!
//! There is a single fixed key, so the cache is one timestamped slot. Writers
//! replace the whole entry under a write lock, which gives last-write-wins and
//! never exposes a half-written list to readers.
//!
//! Every invalidation bumps a generation counter. A fetch records the
//! generation before going to the network and may only store its result if
//! no invalidation happened meanwhile, so a slow listing cannot bring back a
//! list older than a successful add.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::models::Product;

/// Name of the single cache slot, used in log output.
pub const PRODUCT_LIST_KEY: &str = "product_list";

struct CacheEntry {
    products: Arc<Vec<Product>>,
    written_at: Instant,
}

#[derive(Default)]
struct Slot {
    entry: Option<CacheEntry>,
    generation: u64,
}

/// Shared, cloneable handle to the cached product list.
#[derive(Clone, Default)]
pub struct ProductCache {
    slot: Arc<RwLock<Slot>>,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached list if it was written less than `ttl` ago. A zero TTL never hits.
    pub fn get(&self, ttl: Duration) -> Option<Vec<Product>> {
        if ttl.is_zero() {
            return None;
        }
        let slot = self.slot.read().unwrap_or_else(|e| e.into_inner());
        let entry = slot.entry.as_ref()?;
        if entry.written_at.elapsed() < ttl {
            tracing::debug!(key = PRODUCT_LIST_KEY, "cache hit");
            Some(entry.products.as_ref().clone())
        } else {
            tracing::debug!(key = PRODUCT_LIST_KEY, "cache entry expired");
            None
        }
    }

    /// Current generation; take it before fetching and hand it to [`ProductCache::put`].
    pub fn generation(&self) -> u64 {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).generation
    }

    /// Store `products` fetched at `generation`. Returns `false` and stores
    /// nothing when the cache was invalidated since.
    pub fn put(&self, generation: u64, products: Vec<Product>) -> bool {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        if slot.generation != generation {
            tracing::debug!(key = PRODUCT_LIST_KEY, "discarding list fetched before invalidation");
            return false;
        }
        slot.entry = Some(CacheEntry {
            products: Arc::new(products),
            written_at: Instant::now(),
        });
        true
    }

    /// Drop the cached list. Safe to call when nothing is cached.
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        slot.generation = slot.generation.wrapping_add(1);
        if slot.entry.take().is_some() {
            tracing::debug!(key = PRODUCT_LIST_KEY, "cache invalidated");
        }
    }

    pub fn is_populated(&self) -> bool {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).entry.is_some()
    }
}
