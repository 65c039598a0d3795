// ⭐ External Review Service - Boundary to the Yelp Fusion shaped API
//
// Three read-only operations: search businesses, business details, business
// reviews. ReviewService is the seam; YelpClient is the HTTP implementation.

mod error;
mod http;
mod yelp;

#[cfg(test)]
pub(crate) mod stub;

pub use error::ExternalServiceError;
pub use yelp::{YelpClient, DEFAULT_BASE_URL};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default number of search results requested
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Largest page the search endpoint accepts
pub const MAX_SEARCH_LIMIT: u32 = 50;

// ============================================================================
// TRAIT
// ============================================================================

/// Read access to the external review service.
///
/// Every call is a single attempt: no retry and no timeout policy.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Search businesses by location and optional category list.
    ///
    /// # Errors
    ///
    /// Returns [`ExternalServiceError`] if no credential is configured, the
    /// request fails, or the response cannot be parsed.
    async fn search_businesses(
        &self,
        search: &ExternalSearch,
    ) -> Result<Vec<ExternalBusiness>, ExternalServiceError>;

    /// Fetch canonical details for one business.
    ///
    /// # Errors
    ///
    /// See [`ReviewService::search_businesses`].
    async fn business_details(
        &self,
        external_id: &str,
    ) -> Result<ExternalBusiness, ExternalServiceError>;

    /// Fetch the reviews the service publishes for one business.
    ///
    /// # Errors
    ///
    /// See [`ReviewService::search_businesses`].
    async fn business_reviews(
        &self,
        external_id: &str,
    ) -> Result<Vec<ExternalReview>, ExternalServiceError>;
}

// ============================================================================
// TYPES
// ============================================================================

/// Parameters of an external business search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSearch {
    /// Free-form location (e.g. `Pleasanton, CA`)
    pub location: String,
    /// Comma-separated category aliases (e.g. `coffee,bakeries`)
    pub categories: Option<String>,
    /// Result count, clamped to [`MAX_SEARCH_LIMIT`]
    pub limit: u32,
}

impl ExternalSearch {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            categories: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    #[must_use]
    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = Some(categories.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Business record as returned by the external service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalBusiness {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub categories: Vec<ExternalCategory>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub location: Option<ExternalLocation>,
    #[serde(default)]
    pub phone: String,
    /// Human-formatted phone; empty when the business lists none
    #[serde(default)]
    pub display_phone: String,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalCategory {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalLocation {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl ExternalLocation {
    /// Single-line address, skipping missing parts
    #[must_use]
    pub fn one_line(&self) -> String {
        let state_zip = [self.state.as_deref(), self.zip_code.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        [self.address1.as_deref(), self.city.as_deref(), Some(state_zip.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Review record as returned by the external service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReview {
    pub id: String,
    pub rating: u8,
    pub user: ExternalUser,
    #[serde(default)]
    pub text: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub time_created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUser {
    pub name: String,
}

// ============================================================================
// TESTS
// ============================================================================
