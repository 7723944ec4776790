//! Backing store contract for merchant persistence

use anyhow::Result;
use async_trait::async_trait;

use crate::core::filter::Filter;
use crate::core::merchant::{Merchant, MerchantDraft, MerchantId};

/// Storage contract for merchant records.
///
/// Implementations are agnostic to the storage mechanism. Absent records are
/// surfaced as `None` (reads) or `false` (writes), never as errors; errors
/// are reserved for storage failures.
///
/// All read paths return active merchants only — soft-deleted rows are never
/// visible through this contract.
#[async_trait]
pub trait MerchantStore: Send + Sync {
    /// All active merchants.
    async fn get_all(&self) -> Result<Vec<Merchant>>;

    /// One active merchant by id, or `None`.
    async fn get_by_id(&self, id: MerchantId) -> Result<Option<Merchant>>;

    /// Active merchants satisfying the filter, evaluated in memory over the
    /// full active list.
    async fn get_filtered(&self, filter: &dyn Filter<Merchant>) -> Result<Vec<Merchant>>;

    /// Persist a new merchant, assigning its id and creation timestamp.
    async fn create(&self, draft: MerchantDraft) -> Result<Merchant>;

    /// Replace an existing active record wholesale. Returns `false` when no
    /// active record with the given id exists.
    async fn update(&self, merchant: &Merchant) -> Result<bool>;

    /// Soft-delete by id — the record is marked, never removed. Returns
    /// `false` when no active record with the given id exists.
    async fn delete(&self, id: MerchantId) -> Result<bool>;
}
