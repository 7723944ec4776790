//! Write-model validation
//!
//! Name length and email shape are enforced through `validator` derives on
//! the write models; category membership is checked here against the
//! configured allowed set, ignoring case.

use validator::Validate;

use crate::core::error::RegistryError;
use crate::core::merchant::{MerchantDraft, MerchantUpdate};

/// Validate a creation draft against the allowed category set.
pub fn validate_draft(
    draft: &MerchantDraft,
    allowed_categories: &[String],
) -> Result<(), RegistryError> {
    draft.validate().map_err(into_registry_error)?;
    check_category(&draft.category, allowed_categories)
}

/// Validate an update against the allowed category set.
pub fn validate_update(
    update: &MerchantUpdate,
    allowed_categories: &[String],
) -> Result<(), RegistryError> {
    update.validate().map_err(into_registry_error)?;
    check_category(&update.category, allowed_categories)
}

/// Case-insensitive membership check against the allowed category set.
pub fn check_category(
    category: &str,
    allowed_categories: &[String],
) -> Result<(), RegistryError> {
    if allowed_categories
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(category))
    {
        Ok(())
    } else {
        Err(RegistryError::validation(
            "category",
            format!(
                "category must be one of: {}",
                allowed_categories.join(", ")
            ),
        ))
    }
}

/// Surface the first field violation as a [`RegistryError`].
fn into_registry_error(errors: validator::ValidationErrors) -> RegistryError {
    for (field, field_errors) in errors.field_errors() {
        if let Some(error) = field_errors.first() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid value for `{field}`"));
            return RegistryError::validation(field.to_string(), message);
        }
    }
    RegistryError::validation("input", "validation failed")
}
