// Entity Models
//
// Each entity has:
// - Stable identity (sequential integer) that NEVER changes
// - Values that can be replaced through explicit insert/update shapes

pub mod business;
pub mod review;

pub use business::{Business, BusinessUpdate, Hours, NewBusiness};
pub use review::{AggregatedReview, NewReview, Review, ReviewId};
