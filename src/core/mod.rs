//! Core module containing the filter machinery and merchant domain types

pub mod criterion;
pub mod error;
pub mod filter;
pub mod merchant;
pub mod query;
pub mod store;
pub mod validation;

pub use criterion::Criterion;
pub use error::RegistryError;
pub use filter::{ByContains, ByInterval, ByValue, CompositeFilter, Filter};
pub use merchant::{Merchant, MerchantDraft, MerchantId, MerchantUpdate};
pub use query::MerchantQuery;
pub use store::MerchantStore;
