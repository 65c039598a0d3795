// 🧪 Stub Review Service - In-process ReviewService for tests

use super::{
    ExternalBusiness, ExternalReview, ExternalSearch, ExternalServiceError, ExternalUser,
    ReviewService,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned responses keyed by nothing: every id gets the same answer
#[derive(Debug, Default)]
pub(crate) struct StubReviewService {
    pub details: Option<ExternalBusiness>,
    pub reviews: Vec<ExternalReview>,
    pub businesses: Vec<ExternalBusiness>,
    /// Fail every call with an API error of this status
    pub fail_status: Option<u16>,
    /// Fail every call as if no credential were configured
    pub unconfigured: bool,
    pub calls: AtomicUsize,
}

impl StubReviewService {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Default::default()
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ExternalServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unconfigured {
            return Err(ExternalServiceError::NotConfigured);
        }
        if let Some(status) = self.fail_status {
            return Err(ExternalServiceError::Api {
                status,
                message: "stubbed failure".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn review(id: &str, author: &str, rating: u8, time_created: &str) -> ExternalReview {
    ExternalReview {
        id: id.to_string(),
        rating,
        user: ExternalUser {
            name: author.to_string(),
        },
        text: format!("Review by {author}"),
        time_created: time_created.to_string(),
    }
}

#[async_trait]
impl ReviewService for StubReviewService {
    async fn search_businesses(
        &self,
        _search: &ExternalSearch,
    ) -> Result<Vec<ExternalBusiness>, ExternalServiceError> {
        self.check()?;
        Ok(self.businesses.clone())
    }

    async fn business_details(
        &self,
        external_id: &str,
    ) -> Result<ExternalBusiness, ExternalServiceError> {
        self.check()?;
        self.details.clone().ok_or_else(|| ExternalServiceError::Api {
            status: 404,
            message: format!("no business {external_id}"),
        })
    }

    async fn business_reviews(
        &self,
        _external_id: &str,
    ) -> Result<Vec<ExternalReview>, ExternalServiceError> {
        self.check()?;
        Ok(self.reviews.clone())
    }
}
