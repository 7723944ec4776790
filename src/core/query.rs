//! Query terms for merchant lookups
//!
//! [`MerchantQuery`] is the caller-facing bundle of optional filter terms.
//! Terms that are unset (or blank) contribute no filter, so an empty query
//! builds an empty composite and every active merchant passes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::filter::CompositeFilter;
use crate::core::merchant::{Merchant, filters};

/// Optional filter terms, typically deserialized from a request payload.
///
/// # Example
/// ```rust,ignore
/// let query = MerchantQuery::from_json_str(r#"{"name": "cafe", "category": "Food"}"#)?;
/// let merchants = store.get_filtered(&query.to_filter()).await?;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantQuery {
    /// Case-insensitive name substring.
    pub name: Option<String>,

    /// Exact category.
    pub category: Option<String>,

    /// Inclusive lower bound on creation time.
    pub created_after: Option<DateTime<Utc>>,

    /// Inclusive upper bound on creation time.
    pub created_before: Option<DateTime<Utc>>,
}

impl MerchantQuery {
    /// Parse query terms from a JSON object string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let query = serde_json::from_str(json)?;
        Ok(query)
    }

    /// Build the AND-composition of the set terms.
    ///
    /// Blank strings are treated as unset. With no terms the composite is
    /// empty and vacuously matches every entity.
    pub fn to_filter(&self) -> CompositeFilter<Merchant> {
        let mut composite = CompositeFilter::new();

        if let Some(name) = self.name.as_deref().filter(|s| !s.trim().is_empty()) {
            composite.add(filters::name_contains(name));
        }
        if let Some(category) = self.category.as_deref().filter(|s| !s.trim().is_empty()) {
            composite.add(filters::category_equals(category));
        }
        match (self.created_after, self.created_before) {
            (Some(from), Some(to)) => composite.add(filters::created_between(from, to)),
            (Some(from), None) => {
                composite.add(filters::created_between(from, DateTime::<Utc>::MAX_UTC));
            }
            (None, Some(to)) => {
                composite.add(filters::created_between(DateTime::<Utc>::MIN_UTC, to));
            }
            (None, None) => {}
        }

        composite
    }
}
