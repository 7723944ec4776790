//! # Merx
//!
//! A merchant directory core: composable entity filters in front of a
//! storage contract, with a cache-coherent decorator keeping reads fast and
//! correct across every write path.
//!
//! ## Features
//!
//! - **Criterion/Filter Composition**: Named field extractors combined with
//!   equality, contains, and interval comparison policies
//! - **AND-Only Composites**: An ordered filter list with vacuous truth on
//!   empty — "no filters selected" means "all entities pass"
//! - **Storage Contract**: Async [`core::MerchantStore`] trait, agnostic to
//!   the backing mechanism
//! - **Cache-Coherent Decorator**: A time-bounded cache of the all-active
//!   view, kept consistent with creates, updates, and soft deletes
//! - **Soft Delete Support**: Records are marked, never removed, and stay
//!   invisible to every active read path
//! - **Validation**: Name, email, and category rules enforced before writes
//!   reach storage
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use merx::prelude::*;
//!
//! let config = RegistryConfig::default();
//! let store = CachedMerchantStore::with_ttl(InMemoryMerchantStore::new(), config.cache_ttl());
//! let service = MerchantService::new(store, config);
//!
//! let id = service
//!     .create(MerchantDraft::new("Coffee Bean Cafe", "cafe@example.com", "Food"))
//!     .await?;
//!
//! // Narrow by name-contains AND category-equals.
//! let query = MerchantQuery {
//!     name: Some("cafe".into()),
//!     category: Some("Food".into()),
//!     ..Default::default()
//! };
//! let matches = service.get_filtered(&query).await?;
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod service;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        criterion::Criterion,
        error::RegistryError,
        filter::{ByContains, ByInterval, ByValue, CompositeFilter, Filter},
        merchant::{Merchant, MerchantDraft, MerchantId, MerchantUpdate, criteria, filters},
        query::MerchantQuery,
        store::MerchantStore,
    };

    // === Storage ===
    pub use crate::storage::{
        CachedMerchantStore, DEFAULT_CACHE_TTL, InMemoryMerchantStore, TimedCache,
    };

    // === Service & Config ===
    pub use crate::config::RegistryConfig;
    pub use crate::service::MerchantService;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
