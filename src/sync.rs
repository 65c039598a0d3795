// 🔄 Sync Adapter - Overwrite selected fields with external-service data
//
// One external call, then one partial update under the write lock.
// Nothing is applied if the external call fails.

use crate::directory::Directory;
use crate::entities::{Business, BusinessUpdate};
use crate::error::{DirectoryError, Result};
use crate::external::ExternalBusiness;

impl Directory {
    /// Refresh rating, review count, open status and phone from the
    /// external service
    ///
    /// # Errors
    ///
    /// Returns `BusinessNotFound` / `NoExternalId` (both NotFound kind),
    /// `Configuration` if no credential is set, `ExternalService` if the
    /// call fails.
    pub async fn sync(&self, business_id: u32) -> Result<Business> {
        let business = self.repository.read().await.get(business_id)?;
        let external_id = business
            .external_id
            .ok_or(DirectoryError::NoExternalId { id: business_id })?;

        let details = self
            .service
            .business_details(&external_id)
            .await
            .map_err(|e| {
                tracing::error!(business_id, %external_id, %e, "external sync failed");
                DirectoryError::from(e)
            })?;

        let updated = self
            .repository
            .write()
            .await
            .update(business_id, sync_update(&details))?;

        tracing::info!(
            business_id,
            rating = ?updated.rating,
            review_count = ?updated.review_count,
            is_open = ?updated.is_open,
            "business synced from external service"
        );
        Ok(updated)
    }
}

/// The partial update a sync applies
///
/// Phone is only replaced when the service supplies a non-empty value.
pub fn sync_update(details: &ExternalBusiness) -> BusinessUpdate {
    let phone = (!details.display_phone.trim().is_empty())
        .then(|| Some(details.display_phone.clone()));

    BusinessUpdate {
        rating: Some(Some(details.rating)),
        review_count: Some(Some(details.review_count)),
        is_open: Some(Some(!details.is_closed)),
        phone,
        ..Default::default()
    }
}

// ============================================================================
// TESTS
// ============================================================================
