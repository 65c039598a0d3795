// 🗂️ Business Repository - In-memory businesses and reviews
//
// Owns its keyed maps and id counters. No internal locking: the owner
// (see Directory) decides how calls are serialized.

use crate::entities::{Business, BusinessUpdate, NewBusiness, NewReview, Review};
use crate::error::{DirectoryError, Result};
use std::collections::BTreeMap;

/// Category sentinel meaning "every business"
pub const ALL_CATEGORIES: &str = "All";

// ============================================================================
// BUSINESS REPOSITORY
// ============================================================================

/// In-memory store for businesses and their first-party reviews
///
/// Ids are assigned sequentially starting at 1, separately per entity type.
/// BTreeMap keeps reads in id order, which is also creation order.
#[derive(Debug, Clone)]
pub struct BusinessRepository {
    businesses: BTreeMap<u32, Business>,
    reviews: BTreeMap<u32, Review>,
    next_business_id: u32,
    next_review_id: u32,
}

impl BusinessRepository {
    /// Create new empty repository
    pub fn new() -> Self {
        BusinessRepository {
            businesses: BTreeMap::new(),
            reviews: BTreeMap::new(),
            next_business_id: 1,
            next_review_id: 1,
        }
    }

    /// Create repository with the downtown seed set pre-loaded
    pub fn with_defaults() -> Self {
        let mut repository = BusinessRepository::new();
        crate::seed::load(&mut repository);
        repository
    }

    // ------------------------------------------------------------------------
    // Businesses
    // ------------------------------------------------------------------------

    /// Get all businesses
    pub fn all(&self) -> Vec<Business> {
        self.businesses.values().cloned().collect()
    }

    /// Get a business by id
    ///
    /// # Errors
    ///
    /// Returns `BusinessNotFound` if no business has this id.
    pub fn get(&self, id: u32) -> Result<Business> {
        self.businesses
            .get(&id)
            .cloned()
            .ok_or(DirectoryError::BusinessNotFound { id })
    }

    pub fn contains(&self, id: u32) -> bool {
        self.businesses.contains_key(&id)
    }

    /// Store a new business under the next unused id
    pub fn create(&mut self, new: NewBusiness) -> Business {
        let id = self.next_business_id;
        self.next_business_id += 1;

        let business = Business::from_new(id, new);
        self.businesses.insert(id, business.clone());
        business
    }

    /// Replace the supplied fields of an existing business
    ///
    /// # Errors
    ///
    /// Returns `BusinessNotFound` if no business has this id.
    pub fn update(&mut self, id: u32, update: BusinessUpdate) -> Result<Business> {
        let business = self
            .businesses
            .get_mut(&id)
            .ok_or(DirectoryError::BusinessNotFound { id })?;

        update.apply_to(business);
        Ok(business.clone())
    }

    /// Case-insensitive substring search over name, description and category
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Business> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.businesses
            .values()
            .filter(|business| business.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// Exact, case-sensitive category match ("All" returns everything)
    pub fn by_category(&self, category: &str) -> Vec<Business> {
        if category == ALL_CATEGORIES {
            return self.all();
        }

        self.businesses
            .values()
            .filter(|business| business.category == category)
            .cloned()
            .collect()
    }

    /// Distinct categories, in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for business in self.businesses.values() {
            if !categories.contains(&business.category) {
                categories.push(business.category.clone());
            }
        }
        categories
    }

    /// Count businesses
    pub fn count(&self) -> usize {
        self.businesses.len()
    }

    // ------------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------------

    /// Every first-party review, in creation order
    pub fn all_reviews(&self) -> Vec<Review> {
        self.reviews.values().cloned().collect()
    }

    /// First-party reviews of a business, in creation order
    pub fn reviews_for(&self, business_id: u32) -> Vec<Review> {
        self.reviews
            .values()
            .filter(|review| review.business_id == business_id)
            .cloned()
            .collect()
    }

    /// Store a new review under the next unused id
    ///
    /// Does not check that the business exists.
    pub fn create_review(&mut self, new: NewReview) -> Review {
        let id = self.next_review_id;
        self.next_review_id += 1;

        let review = Review::from_new(id, new);
        self.reviews.insert(id, review.clone());
        review
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

impl Default for BusinessRepository {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================
