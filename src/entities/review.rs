// ⭐ Review Entity - A rated, authored comment attached to a Business

use serde::{Deserialize, Serialize};

/// First-party review stored in the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub business_id: u32,
    pub author: String,

    /// Expected 1-5, not enforced
    pub rating: u8,

    pub text: String,

    /// Free-form date string, not validated as a calendar date
    pub date: String,
}

/// Fields supplied when creating a review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub business_id: u32,
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
}

impl Review {
    pub fn from_new(id: u32, new: NewReview) -> Self {
        Review {
            id,
            business_id: new.business_id,
            author: new.author,
            rating: new.rating,
            text: new.text,
            date: new.date,
        }
    }
}

// ============================================================================
// AGGREGATED REVIEWS
// ============================================================================

/// Identifier of an aggregated review
///
/// First-party ids serialize as numbers, external ids as namespaced strings
/// ("yelp-<id>") so the two never collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    Local(u32),
    External(String),
}

/// A review in the shape shared by first-party and external sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedReview {
    pub id: ReviewId,
    pub business_id: u32,
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
}

impl AggregatedReview {
    pub fn is_external(&self) -> bool {
        matches!(self.id, ReviewId::External(_))
    }
}

impl From<Review> for AggregatedReview {
    fn from(review: Review) -> Self {
        AggregatedReview {
            id: ReviewId::Local(review.id),
            business_id: review.business_id,
            author: review.author,
            rating: review.rating,
            text: review.text,
            date: review.date,
        }
    }
}
