//! Merchant entity, write models, and the merchant-specific filter dimensions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stable surrogate key, assigned by the backing store on creation.
pub type MerchantId = i64;

/// Categories a merchant may belong to. Matching is case-insensitive.
pub const ALLOWED_CATEGORIES: [&str; 3] = ["Retail", "Food", "Services"];

/// A merchant record.
///
/// `created_at` is set once at creation and never changes afterwards.
/// A merchant with `is_deleted == true` is invisible to every active read
/// path; deletion is always a soft mark, never physical removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: MerchantId,
    pub name: String,
    pub email: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Merchant {
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Apply the mutable fields of an update onto this record.
    ///
    /// `id` and `created_at` are untouched, keeping the surrogate key and
    /// creation timestamp stable across updates.
    pub fn apply(&mut self, update: &MerchantUpdate) {
        self.name = update.name.clone();
        self.email = update.email.clone();
        self.category = update.category.clone();
    }
}

/// Input for creating a merchant. The store assigns `id`, stamps
/// `created_at`, and starts the record active.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MerchantDraft {
    #[validate(length(min = 3, max = 100, message = "name must be 3 to 100 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub category: String,
}

impl MerchantDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            category: category.into(),
        }
    }
}

/// Input for updating an existing merchant. Applied onto the stored record
/// so `created_at` stays set-once.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MerchantUpdate {
    pub id: MerchantId,
    #[validate(length(min = 3, max = 100, message = "name must be 3 to 100 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub category: String,
}

/// Field-extraction criteria over [`Merchant`].
pub mod criteria {
    use super::Merchant;
    use crate::core::criterion::Criterion;
    use chrono::{DateTime, Utc};

    pub fn name() -> Criterion<Merchant, String> {
        Criterion::new("name", |m: &Merchant| Some(m.name.clone()))
    }

    pub fn category() -> Criterion<Merchant, String> {
        Criterion::new("category", |m: &Merchant| Some(m.category.clone()))
    }

    pub fn created_at() -> Criterion<Merchant, DateTime<Utc>> {
        Criterion::new("created_at", |m: &Merchant| Some(m.created_at))
    }
}

/// Ready-made merchant filters combining a criterion with a comparison
/// policy.
pub mod filters {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};

    use super::{Merchant, criteria};
    use crate::core::filter::{ByContains, ByInterval, ByValue, Filter};

    /// Case-insensitive name substring match.
    pub fn name_contains(needle: impl Into<String>) -> Arc<dyn Filter<Merchant>> {
        Arc::new(ByContains::new(criteria::name(), needle))
    }

    /// Exact (case-sensitive) name match.
    pub fn name_equals(name: impl Into<String>) -> Arc<dyn Filter<Merchant>> {
        Arc::new(ByValue::new(criteria::name(), name.into()))
    }

    /// Exact (case-sensitive) category match.
    pub fn category_equals(category: impl Into<String>) -> Arc<dyn Filter<Merchant>> {
        Arc::new(ByValue::new(criteria::category(), category.into()))
    }

    /// Creation timestamp within `[from, to]`, both inclusive.
    pub fn created_between(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Arc<dyn Filter<Merchant>> {
        Arc::new(ByInterval::new(criteria::created_at(), from, to))
    }
}
