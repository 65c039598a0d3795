// 🏪 Business Entity - A directory entry for a physical establishment
//
// Identity: sequential integer id assigned by the repository (never changes)
// Values: everything else, replaced field-by-field through BusinessUpdate

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekday name → hours string (e.g. "Monday" → "11:00 AM - 10:00 PM")
pub type Hours = BTreeMap<String, String>;

// ============================================================================
// BUSINESS ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Stable identity - NEVER changes once assigned
    pub id: u32,

    pub name: String,

    /// Open-ended category label ("Restaurants", "Cafés", ...)
    pub category: String,

    pub description: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub hours: Option<Hours>,

    /// Average rating, 0.0 - 5.0
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub is_open: Option<bool>,

    /// Identifier of this business in the external review service
    pub external_id: Option<String>,

    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
}

impl Business {
    /// Materialize a new business under an assigned id
    pub fn from_new(id: u32, new: NewBusiness) -> Self {
        Business {
            id,
            name: new.name,
            category: new.category,
            description: new.description,
            phone: new.phone,
            website: new.website,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            hours: new.hours,
            rating: new.rating,
            review_count: new.review_count,
            is_open: new.is_open,
            external_id: new.external_id,
            image_url: new.image_url,
            images: new.images,
        }
    }

    /// Unknown status counts as closed
    pub fn is_open_now(&self) -> bool {
        self.is_open == Some(true)
    }

    /// Hours string for a weekday, if the business publishes hours
    pub fn hours_on(&self, day: Weekday) -> Option<&str> {
        self.hours
            .as_ref()
            .and_then(|hours| hours.get(weekday_name(day)))
            .map(String::as_str)
    }

    /// Case-insensitive substring match on name, description, or category
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ============================================================================
// INSERT SHAPE
// ============================================================================

/// Fields supplied when creating a business (everything but the id)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBusiness {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub hours: Option<Hours>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub is_open: Option<bool>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

// ============================================================================
// PARTIAL UPDATE
// ============================================================================

/// Explicit partial update
///
/// `None` leaves a field unchanged, `Some(v)` replaces it with `v`.
/// Nullable fields take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub phone: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub hours: Option<Option<Hours>>,
    pub rating: Option<Option<f64>>,
    pub review_count: Option<Option<u32>>,
    pub is_open: Option<Option<bool>>,
    pub external_id: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub images: Option<Option<Vec<String>>>,
}

impl BusinessUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == BusinessUpdate::default()
    }

    /// Apply every supplied field onto `business`; the id is never touched
    pub fn apply_to(self, business: &mut Business) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut business.name, self.name);
        set(&mut business.category, self.category);
        set(&mut business.description, self.description);
        set(&mut business.phone, self.phone);
        set(&mut business.website, self.website);
        set(&mut business.address, self.address);
        set(&mut business.latitude, self.latitude);
        set(&mut business.longitude, self.longitude);
        set(&mut business.hours, self.hours);
        set(&mut business.rating, self.rating);
        set(&mut business.review_count, self.review_count);
        set(&mut business.is_open, self.is_open);
        set(&mut business.external_id, self.external_id);
        set(&mut business.image_url, self.image_url);
        set(&mut business.images, self.images);
    }
}

// ============================================================================
// TESTS
// ============================================================================
