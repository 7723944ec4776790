//! Application service orchestrating validation, filtering, and storage

use crate::config::RegistryConfig;
use crate::core::error::RegistryError;
use crate::core::merchant::{Merchant, MerchantDraft, MerchantId, MerchantUpdate, filters};
use crate::core::query::MerchantQuery;
use crate::core::store::MerchantStore;
use crate::core::validation;

/// Service-layer entry point for merchant operations.
///
/// Validates write models before they reach the store, builds filters from
/// caller terms, and logs each operation. Not-found outcomes surface as
/// `None`/`false`, never as errors.
pub struct MerchantService<S> {
    store: S,
    config: RegistryConfig,
}

impl<S: MerchantStore> MerchantService<S> {
    pub fn new(store: S, config: RegistryConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store, for callers needing direct access.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and persist a new merchant, returning its assigned id.
    pub async fn create(&self, draft: MerchantDraft) -> Result<MerchantId, RegistryError> {
        validation::validate_draft(&draft, &self.config.allowed_categories)?;

        tracing::info!(name = %draft.name, "Creating merchant");
        let created = self.store.create(draft).await?;
        tracing::info!(merchant_id = created.id, "Merchant created");

        Ok(created.id)
    }

    pub async fn get_all(&self) -> Result<Vec<Merchant>, RegistryError> {
        tracing::info!("Retrieving all merchants");
        let merchants = self.store.get_all().await?;

        if merchants.is_empty() {
            tracing::warn!("No merchants found");
        }

        Ok(merchants)
    }

    pub async fn get_by_id(&self, id: MerchantId) -> Result<Option<Merchant>, RegistryError> {
        tracing::info!(merchant_id = id, "Retrieving merchant by id");
        let merchant = self.store.get_by_id(id).await?;

        if merchant.is_none() {
            tracing::warn!(merchant_id = id, "Merchant not found");
        }

        Ok(merchant)
    }

    /// Merchants whose name contains `name`, ignoring case.
    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Merchant>, RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::validation("name", "name must not be blank"));
        }

        tracing::info!(name, "Retrieving merchants by name");
        let merchants = self
            .store
            .get_filtered(filters::name_contains(name).as_ref())
            .await?;

        if merchants.is_empty() {
            tracing::warn!(name, "No merchants found with name");
        }

        Ok(merchants)
    }

    /// Merchants in the given category. The category must be one of the
    /// configured allowed set.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Merchant>, RegistryError> {
        if category.trim().is_empty() {
            return Err(RegistryError::validation(
                "category",
                "category must not be blank",
            ));
        }
        validation::check_category(category, &self.config.allowed_categories)?;

        tracing::info!(category, "Retrieving merchants by category");
        let merchants = self
            .store
            .get_filtered(filters::category_equals(category).as_ref())
            .await?;

        if merchants.is_empty() {
            tracing::warn!(category, "No merchants found with category");
        }

        Ok(merchants)
    }

    /// Merchants matching the AND-composition of the query's terms. An
    /// empty query returns every active merchant.
    pub async fn get_filtered(&self, query: &MerchantQuery) -> Result<Vec<Merchant>, RegistryError> {
        if let Some(category) = query.category.as_deref().filter(|s| !s.trim().is_empty()) {
            validation::check_category(category, &self.config.allowed_categories)?;
        }

        let filter = query.to_filter();
        tracing::info!(terms = filter.len(), "Retrieving merchants with filter");
        let merchants = self.store.get_filtered(&filter).await?;

        if merchants.is_empty() {
            tracing::warn!("No merchants found with the specified filter");
        }

        Ok(merchants)
    }

    /// Apply an update onto the stored record. Returns `false` when the
    /// merchant does not exist.
    pub async fn update(&self, update: MerchantUpdate) -> Result<bool, RegistryError> {
        validation::validate_update(&update, &self.config.allowed_categories)?;

        tracing::info!(merchant_id = update.id, "Updating merchant");
        let Some(mut existing) = self.store.get_by_id(update.id).await? else {
            tracing::warn!(merchant_id = update.id, "Merchant not found");
            return Ok(false);
        };

        existing.apply(&update);
        let updated = self.store.update(&existing).await?;

        if updated {
            tracing::info!(merchant_id = update.id, "Merchant updated successfully");
        } else {
            tracing::warn!(merchant_id = update.id, "Merchant vanished before update");
        }

        Ok(updated)
    }

    /// Soft-delete a merchant. Returns `false` when it does not exist.
    pub async fn delete(&self, id: MerchantId) -> Result<bool, RegistryError> {
        tracing::info!(merchant_id = id, "Deleting merchant");
        let deleted = self.store.delete(id).await?;

        if deleted {
            tracing::info!(merchant_id = id, "Merchant deleted successfully");
        } else {
            tracing::warn!(merchant_id = id, "Merchant not found");
        }

        Ok(deleted)
    }
}
