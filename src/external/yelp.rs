// 🔌 Yelp Client - reqwest implementation of ReviewService

use super::error::ExternalServiceError;
use super::http::{check_response, read_json};
use super::{ExternalBusiness, ExternalReview, ExternalSearch, ReviewService, MAX_SEARCH_LIMIT};
use crate::config::YelpConfig;
use async_trait::async_trait;
use serde::Deserialize;

/// Public Yelp Fusion API root
pub const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<ExternalBusiness>,
}

#[derive(Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    reviews: Vec<ExternalReview>,
}

// ============================================================================
// CLIENT
// ============================================================================

/// HTTP client for the Yelp Fusion API.
///
/// Built even when no API key is configured; every call then fails with
/// [`ExternalServiceError::NotConfigured`] before touching the network.
#[derive(Debug, Clone)]
pub struct YelpClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YelpClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExternalServiceError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(config: &YelpConfig) -> Result<Self, ExternalServiceError> {
        if !config.is_configured() {
            tracing::warn!("Yelp API key not found; review service calls will fail");
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("downtown-directory/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn api_key(&self) -> Result<&str, ExternalServiceError> {
        if self.api_key.is_empty() {
            return Err(ExternalServiceError::NotConfigured);
        }
        Ok(&self.api_key)
    }

    fn search_url(&self, search: &ExternalSearch) -> String {
        let limit = search.limit.clamp(1, MAX_SEARCH_LIMIT);
        let mut url = format!(
            "{}/businesses/search?location={}&limit={limit}&sort_by=rating",
            self.base_url,
            urlencoding::encode(&search.location)
        );
        if let Some(categories) = search.categories.as_deref().filter(|c| !c.is_empty()) {
            url.push_str("&categories=");
            url.push_str(&urlencoding::encode(categories));
        }
        url
    }

    fn business_url(&self, external_id: &str) -> String {
        format!(
            "{}/businesses/{}",
            self.base_url,
            urlencoding::encode(external_id)
        )
    }

    fn reviews_url(&self, external_id: &str) -> String {
        format!("{}/reviews", self.business_url(external_id))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, ExternalServiceError> {
        let api_key = self.api_key()?;
        tracing::debug!(url, "review service request");

        let resp = self.http.get(url).bearer_auth(api_key).send().await?;
        check_response(resp).await
    }
}

#[async_trait]
impl ReviewService for YelpClient {
    async fn search_businesses(
        &self,
        search: &ExternalSearch,
    ) -> Result<Vec<ExternalBusiness>, ExternalServiceError> {
        let resp = self.get(&self.search_url(search)).await?;
        let data: SearchResponse = read_json(resp).await?;
        Ok(data.businesses)
    }

    async fn business_details(
        &self,
        external_id: &str,
    ) -> Result<ExternalBusiness, ExternalServiceError> {
        let resp = self.get(&self.business_url(external_id)).await?;
        read_json(resp).await
    }

    async fn business_reviews(
        &self,
        external_id: &str,
    ) -> Result<Vec<ExternalReview>, ExternalServiceError> {
        let resp = self.get(&self.reviews_url(external_id)).await?;
        let data: ReviewsResponse = read_json(resp).await?;
        Ok(data.reviews)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DETAILS_FIXTURE: &str = r#"{
        "id": "inklings-coffee-tea-pleasanton",
        "name": "Inklings Coffee & Tea",
        "rating": 4.5,
        "review_count": 212,
        "categories": [{"alias": "coffee", "title": "Coffee & Tea"}],
        "coordinates": {"latitude": 37.661491, "longitude": -121.874916},
        "location": {
            "address1": "530 Main St",
            "city": "Pleasanton",
            "state": "CA",
            "zip_code": "94566"
        },
        "phone": "+19255550156",
        "display_phone": "(925) 555-0156",
        "is_closed": false,
        "url": "https://www.yelp.com/biz/inklings-coffee-tea-pleasanton"
    }"#;

    const REVIEWS_FIXTURE: &str = r#"{
        "reviews": [
            {
                "id": "xAG4O7l-t1ubbwVAlPnDKg",
                "rating": 5,
                "user": {"name": "Ella A."},
                "text": "Best latte downtown.",
                "time_created": "2024-03-02 18:04:11"
            },
            {
                "id": "1JNmYjJXr9ZbsfZUAgkeXQ",
                "rating": 3,
                "user": {"name": "Jo K."},
                "text": "Crowded on weekends.",
                "time_created": "2024-02-27 09:15:40"
            }
        ],
        "total": 2
    }"#;

    fn client(api_key: &str) -> YelpClient {
        YelpClient::new(&YelpConfig {
            api_key: api_key.to_string(),
            base_url: "https://api.example.test/v3/".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_parse_business_details() {
        let business: ExternalBusiness = serde_json::from_str(DETAILS_FIXTURE).unwrap();
        assert_eq!(business.id, "inklings-coffee-tea-pleasanton");
        assert_eq!(business.rating, 4.5);
        assert_eq!(business.review_count, 212);
        assert_eq!(business.display_phone, "(925) 555-0156");
        assert!(!business.is_closed);
        assert_eq!(business.categories[0].title, "Coffee & Tea");
        assert_eq!(
            business.location.unwrap().one_line(),
            "530 Main St, Pleasanton, CA 94566"
        );
    }

    #[test]
    fn test_parse_reviews() {
        let data: ReviewsResponse = serde_json::from_str(REVIEWS_FIXTURE).unwrap();
        assert_eq!(data.reviews.len(), 2);
        assert_eq!(data.reviews[0].user.name, "Ella A.");
        assert_eq!(data.reviews[1].time_created, "2024-02-27 09:15:40");
    }

    #[test]
    fn test_parse_missing_arrays_as_empty() {
        let reviews: ReviewsResponse = serde_json::from_str("{}").unwrap();
        assert!(reviews.reviews.is_empty());

        let search: SearchResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(search.businesses.is_empty());
    }

    #[test]
    fn test_search_url_encodes_and_clamps() {
        let client = client("key");
        let search = ExternalSearch::new("Pleasanton, CA")
            .with_categories("coffee,bakeries")
            .with_limit(500);

        assert_eq!(
            client.search_url(&search),
            "https://api.example.test/v3/businesses/search?location=Pleasanton%2C%20CA\
             &limit=50&sort_by=rating&categories=coffee%2Cbakeries"
        );
    }

    #[test]
    fn test_search_url_without_categories() {
        let client = client("key");
        assert_eq!(
            client.search_url(&ExternalSearch::new("94566")),
            "https://api.example.test/v3/businesses/search?location=94566&limit=20&sort_by=rating"
        );
    }

    #[test]
    fn test_business_urls_encode_external_id() {
        let client = client("key");
        assert_eq!(
            client.business_url("café one"),
            "https://api.example.test/v3/businesses/caf%C3%A9%20one"
        );
        assert_eq!(
            client.reviews_url("museum-on-main-pleasanton"),
            "https://api.example.test/v3/businesses/museum-on-main-pleasanton/reviews"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let client = client("");
        assert!(!client.is_configured());

        let err = client.business_reviews("anything").await.unwrap_err();
        assert!(matches!(err, ExternalServiceError::NotConfigured));

        let err = client.business_details("anything").await.unwrap_err();
        assert!(matches!(err, ExternalServiceError::NotConfigured));

        let err = client
            .search_businesses(&ExternalSearch::new("Pleasanton"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExternalServiceError::NotConfigured));
    }
}
