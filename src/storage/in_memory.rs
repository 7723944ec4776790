//! In-memory implementation of MerchantStore for testing and development

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use crate::core::filter::Filter;
use crate::core::merchant::{Merchant, MerchantDraft, MerchantId};
use crate::core::store::MerchantStore;

/// In-memory merchant store.
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// records keep their insertion order so id assignment and iteration stay
/// deterministic. Soft-deleted rows stay in the map and are filtered out of
/// every read.
#[derive(Clone)]
pub struct InMemoryMerchantStore {
    state: Arc<RwLock<StoreState>>,
}

struct StoreState {
    merchants: IndexMap<MerchantId, Merchant>,
    next_id: MerchantId,
}

impl InMemoryMerchantStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                merchants: IndexMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Active merchants ordered by name, the order the store serves lists
    /// in.
    fn active_sorted(state: &StoreState) -> Vec<Merchant> {
        let mut active: Vec<Merchant> = state
            .merchants
            .values()
            .filter(|m| m.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        active
    }
}

impl Default for InMemoryMerchantStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MerchantStore for InMemoryMerchantStore {
    async fn get_all(&self) -> Result<Vec<Merchant>> {
        let state = self
            .state
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(Self::active_sorted(&state))
    }

    async fn get_by_id(&self, id: MerchantId) -> Result<Option<Merchant>> {
        let state = self
            .state
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(state
            .merchants
            .get(&id)
            .filter(|m| m.is_active())
            .cloned())
    }

    async fn get_filtered(&self, filter: &dyn Filter<Merchant>) -> Result<Vec<Merchant>> {
        let state = self
            .state
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(Self::active_sorted(&state)
            .into_iter()
            .filter(|m| filter.is_satisfied_by(m))
            .collect())
    }

    async fn create(&self, draft: MerchantDraft) -> Result<Merchant> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = state.next_id;
        state.next_id += 1;

        let merchant = Merchant {
            id,
            name: draft.name,
            email: draft.email,
            category: draft.category,
            created_at: Utc::now(),
            is_deleted: false,
        };
        state.merchants.insert(id, merchant.clone());

        Ok(merchant)
    }

    async fn update(&self, merchant: &Merchant) -> Result<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match state.merchants.get_mut(&merchant.id) {
            Some(existing) if existing.is_active() => {
                *existing = merchant.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: MerchantId) -> Result<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match state.merchants.get_mut(&id) {
            Some(existing) if existing.is_active() => {
                existing.is_deleted = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
