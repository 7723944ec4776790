//! Cache-coherent decorator over a [`MerchantStore`]
//!
//! Wraps any backing store with a time-bounded cache of the "all active
//! merchants" view and intercepts every mutation to keep that view
//! consistent. The backing store stays unaware of the cache.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::filter::Filter;
use crate::core::merchant::{Merchant, MerchantDraft, MerchantId};
use crate::core::store::MerchantStore;
use crate::storage::cache::TimedCache;

/// Sentinel key for the cached all-active-merchants view.
const ALL_MERCHANTS_KEY: &str = "merchants:all";

/// How long a cached view stays valid after its last write.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(120);

/// A [`MerchantStore`] decorator serving unconditional reads from a
/// time-bounded cache.
///
/// The cached list always holds the post-mutation active view, so no read
/// path re-filters it for soft-deleted rows. Cache accesses are atomic per
/// operation (one lock acquisition inside [`TimedCache`]), and no lock is
/// held across a call into the inner store. A cache mutation is applied
/// only after the inner store reports the write committed — a rejected or
/// failed write never touches the cache.
///
/// Known contract asymmetry, preserved deliberately: `create` seeds the
/// cache when no entry exists, while `update` only patches an element that
/// is already cached. See `delete`/`update` docs.
pub struct CachedMerchantStore<S> {
    inner: S,
    cache: TimedCache<&'static str, Vec<Merchant>>,
}

impl<S: MerchantStore> CachedMerchantStore<S> {
    /// Wrap `inner` with the default two-minute cache.
    pub fn new(inner: S) -> Self {
        Self::with_ttl(inner, DEFAULT_CACHE_TTL)
    }

    /// Wrap `inner` with a caller-chosen expiry, letting tests construct
    /// fast-expiring instances.
    pub fn with_ttl(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: TimedCache::new(ttl),
        }
    }

    /// The wrapped backing store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Append the merchant to the cached view, or seed a fresh one-element
    /// view when none is live.
    fn cache_append_or_seed(&self, merchant: &Merchant) {
        let appended = self.cache.update(&ALL_MERCHANTS_KEY, |list| {
            list.push(merchant.clone());
        });
        if !appended {
            self.cache.set(ALL_MERCHANTS_KEY, vec![merchant.clone()]);
        }
    }
}

#[async_trait]
impl<S: MerchantStore> MerchantStore for CachedMerchantStore<S> {
    /// Serve the cached view verbatim while it is live; otherwise fetch the
    /// full active list from the inner store and cache it with a fresh
    /// expiry.
    async fn get_all(&self) -> Result<Vec<Merchant>> {
        if let Some(cached) = self.cache.get(&ALL_MERCHANTS_KEY) {
            return Ok(cached);
        }

        let merchants = self.inner.get_all().await?;
        self.cache.set(ALL_MERCHANTS_KEY, merchants.clone());

        Ok(merchants)
    }

    /// Scan the cached view first; a hit returns without touching the inner
    /// store. On a miss the inner result, when found, is merged into the
    /// cached view; when absent the cache is left untouched.
    async fn get_by_id(&self, id: MerchantId) -> Result<Option<Merchant>> {
        if let Some(cached) = self.cache.get(&ALL_MERCHANTS_KEY) {
            if let Some(hit) = cached.iter().find(|m| m.id == id) {
                return Ok(Some(hit.clone()));
            }
        }

        let Some(merchant) = self.inner.get_by_id(id).await? else {
            return Ok(None);
        };

        self.cache_append_or_seed(&merchant);

        Ok(Some(merchant))
    }

    /// Always delegates: arbitrary filters make incremental cache
    /// maintenance intractable, so filtered reads neither consult nor
    /// populate the cache.
    async fn get_filtered(&self, filter: &dyn Filter<Merchant>) -> Result<Vec<Merchant>> {
        self.inner.get_filtered(filter).await
    }

    async fn create(&self, draft: MerchantDraft) -> Result<Merchant> {
        let created = self.inner.create(draft).await?;

        self.cache_append_or_seed(&created);

        Ok(created)
    }

    /// Patches the cached element in place after the inner store commits.
    /// A cold cache is not seeded, and an id missing from the cached view
    /// is not injected — only `create` extends the view.
    async fn update(&self, merchant: &Merchant) -> Result<bool> {
        let updated = self.inner.update(merchant).await?;

        if updated {
            self.cache.update(&ALL_MERCHANTS_KEY, |list| {
                if let Some(slot) = list.iter_mut().find(|m| m.id == merchant.id) {
                    *slot = merchant.clone();
                }
            });
        }

        Ok(updated)
    }

    /// Soft-deletes through the inner store, then drops the id from the
    /// cached view once the mark committed.
    async fn delete(&self, id: MerchantId) -> Result<bool> {
        let deleted = self.inner.delete(id).await?;

        if deleted {
            self.cache.update(&ALL_MERCHANTS_KEY, |list| {
                list.retain(|m| m.id != id);
            });
        }

        Ok(deleted)
    }
}
