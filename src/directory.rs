// 🧭 Directory - Shared handle over the repository and the review service
//
// The repository has no locking of its own; the handle wraps it in one
// async RwLock. The lock is never held across an external call.

use crate::entities::{Business, NewReview, Review};
use crate::error::{DirectoryError, Result};
use crate::external::{ExternalBusiness, ExternalSearch, ReviewService};
use crate::repository::BusinessRepository;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable entry point used by the HTTP layer and the CLI
#[derive(Clone)]
pub struct Directory {
    pub(crate) repository: Arc<RwLock<BusinessRepository>>,
    pub(crate) service: Arc<dyn ReviewService>,
}

impl std::fmt::Debug for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Directory").finish_non_exhaustive()
    }
}

impl Directory {
    pub fn new(repository: BusinessRepository, service: Arc<dyn ReviewService>) -> Self {
        Directory {
            repository: Arc::new(RwLock::new(repository)),
            service,
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub async fn list(&self, open_only: bool) -> Vec<Business> {
        let businesses = self.repository.read().await.all();
        retain_open(businesses, open_only)
    }

    pub async fn search(&self, query: &str, open_only: bool) -> Vec<Business> {
        let businesses = self.repository.read().await.search(query);
        retain_open(businesses, open_only)
    }

    pub async fn by_category(&self, category: &str, open_only: bool) -> Vec<Business> {
        let businesses = self.repository.read().await.by_category(category);
        retain_open(businesses, open_only)
    }

    /// # Errors
    ///
    /// Returns `BusinessNotFound` if no business has this id.
    pub async fn get(&self, id: u32) -> Result<Business> {
        self.repository.read().await.get(id)
    }

    pub async fn categories(&self) -> Vec<String> {
        self.repository.read().await.categories()
    }

    // ------------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------------

    /// Add a first-party review to an existing business
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank author or text, `BusinessNotFound`
    /// if the business does not exist.
    pub async fn add_review(&self, review: NewReview) -> Result<Review> {
        if review.author.trim().is_empty() {
            return Err(DirectoryError::validation("author", "must not be empty"));
        }
        if review.text.trim().is_empty() {
            return Err(DirectoryError::validation("text", "must not be empty"));
        }

        let mut repository = self.repository.write().await;
        if !repository.contains(review.business_id) {
            return Err(DirectoryError::BusinessNotFound {
                id: review.business_id,
            });
        }

        let review = repository.create_review(review);
        tracing::info!(review_id = review.id, business_id = review.business_id, "review added");
        Ok(review)
    }

    // ------------------------------------------------------------------------
    // External discovery
    // ------------------------------------------------------------------------

    /// Search the external service directly (not merged into the repository)
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when no credential is set, `ExternalService`
    /// for any other failure.
    pub async fn discover(&self, search: &ExternalSearch) -> Result<Vec<ExternalBusiness>> {
        Ok(self.service.search_businesses(search).await?)
    }
}

fn retain_open(mut businesses: Vec<Business>, open_only: bool) -> Vec<Business> {
    if open_only {
        businesses.retain(Business::is_open_now);
    }
    businesses
}

// ============================================================================
// TESTS
// ============================================================================
