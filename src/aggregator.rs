// 🔀 Review Aggregator - First-party + external reviews in one shape
//
// External failures never fail the read: they degrade to "no external
// reviews" and are logged.

use crate::directory::Directory;
use crate::entities::{AggregatedReview, ReviewId};
use crate::error::Result;
use crate::external::{ExternalReview, ExternalServiceError};
use chrono::NaiveDateTime;

/// Namespace tag for external review ids
pub const EXTERNAL_REVIEW_PREFIX: &str = "yelp-";

const EXTERNAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Directory {
    /// All reviews of a business: first-party first, then external
    ///
    /// # Errors
    ///
    /// Returns `BusinessNotFound` if no business has this id. External
    /// service failures are not errors here.
    pub async fn reviews(&self, business_id: u32) -> Result<Vec<AggregatedReview>> {
        let (business, local) = {
            let repository = self.repository.read().await;
            (repository.get(business_id)?, repository.reviews_for(business_id))
        };

        let external = match business.external_id.as_deref() {
            Some(external_id) => self
                .external_reviews(external_id)
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!(business_id, external_id, %e, "could not fetch external reviews");
                    Vec::new()
                }),
            None => Vec::new(),
        };

        let mut reviews: Vec<AggregatedReview> = local.into_iter().map(Into::into).collect();
        reviews.extend(
            external
                .into_iter()
                .map(|review| normalize_external(business_id, review)),
        );

        Ok(reviews)
    }

    async fn external_reviews(
        &self,
        external_id: &str,
    ) -> std::result::Result<Vec<ExternalReview>, ExternalServiceError> {
        self.service.business_reviews(external_id).await
    }
}

/// Map an external review onto the first-party shape
pub fn normalize_external(business_id: u32, review: ExternalReview) -> AggregatedReview {
    AggregatedReview {
        id: ReviewId::External(format!("{EXTERNAL_REVIEW_PREFIX}{}", review.id)),
        business_id,
        author: review.user.name,
        rating: review.rating,
        text: review.text,
        date: date_portion(&review.time_created),
    }
}

/// "2024-01-15 10:22:33" → "2024-01-15"
///
/// Falls back to the text before the first space for other layouts.
fn date_portion(timestamp: &str) -> String {
    match NaiveDateTime::parse_from_str(timestamp, EXTERNAL_TIMESTAMP_FORMAT) {
        Ok(parsed) => parsed.date().format("%Y-%m-%d").to_string(),
        Err(_) => timestamp
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{NewBusiness, NewReview};
    use crate::error::ErrorKind;
    use crate::external::stub::{review, StubReviewService};
    use crate::repository::BusinessRepository;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn directory_with(service: StubReviewService) -> (Directory, Arc<StubReviewService>) {
        let service = Arc::new(service);
        let directory = Directory::new(BusinessRepository::with_defaults(), service.clone());
        (directory, service)
    }

    fn stub_with_reviews() -> StubReviewService {
        StubReviewService {
            reviews: vec![
                review("abc", "Ella A.", 5, "2024-03-02 18:04:11"),
                review("def", "Jo K.", 3, "2024-02-27 09:15:40"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_date_portion() {
        assert_eq!(date_portion("2024-01-15 10:22:33"), "2024-01-15");
        assert_eq!(date_portion("2024-01-15T10:22:33Z"), "2024-01-15T10:22:33Z");
        assert_eq!(date_portion("Jan 15 2024"), "Jan");
        assert_eq!(date_portion(""), "");
    }

    #[test]
    fn test_normalize_external() {
        let normalized = normalize_external(2, review("xyz", "Ella A.", 5, "2024-03-02 18:04:11"));

        assert_eq!(normalized.id, ReviewId::External("yelp-xyz".to_string()));
        assert_eq!(normalized.business_id, 2);
        assert_eq!(normalized.author, "Ella A.");
        assert_eq!(normalized.rating, 5);
        assert_eq!(normalized.text, "Review by Ella A.");
        assert_eq!(normalized.date, "2024-03-02");
    }

    #[tokio::test]
    async fn test_local_reviews_first_then_external() {
        let (directory, _) = directory_with(stub_with_reviews());

        let reviews = directory.reviews(1).await.unwrap();
        let ids: Vec<ReviewId> = reviews.iter().map(|r| r.id.clone()).collect();

        assert_eq!(
            ids,
            vec![
                ReviewId::Local(1),
                ReviewId::External("yelp-abc".to_string()),
                ReviewId::External("yelp-def".to_string()),
            ]
        );
        assert!(reviews.iter().all(|r| r.business_id == 1));
    }

    #[tokio::test]
    async fn test_no_external_id_skips_service() {
        let (directory, service) = directory_with(stub_with_reviews());
        let business = directory.repository.write().await.create(NewBusiness {
            name: "Corner Deli".to_string(),
            category: "Restaurants".to_string(),
            description: "Sandwiches".to_string(),
            address: "9 Main St".to_string(),
            latitude: 37.66,
            longitude: -121.87,
            ..Default::default()
        });
        let local = directory
            .add_review(NewReview {
                business_id: business.id,
                author: "Lee".to_string(),
                rating: 4,
                text: "Good pastrami".to_string(),
                date: "2024-04-04".to_string(),
            })
            .await
            .unwrap();

        let reviews = directory.reviews(business.id).await.unwrap();

        assert_eq!(reviews, vec![AggregatedReview::from(local)]);
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_external_failure_degrades_to_local_only() {
        let (directory, service) = directory_with(StubReviewService::failing(500));

        let reviews = directory.reviews(2).await.unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].author, "Mike R.");
        assert!(!reviews[0].is_external());
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_service_degrades_to_local_only() {
        let (directory, _) = directory_with(StubReviewService::unconfigured());

        let reviews = directory.reviews(3).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].author, "Emma L.");
    }

    #[tokio::test]
    async fn test_business_without_any_reviews() {
        let (directory, _) = directory_with(StubReviewService::default());
        assert!(directory.reviews(6).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_business() {
        let (directory, service) = directory_with(stub_with_reviews());

        let err = directory.reviews(999).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(service.call_count(), 0);
    }
}
