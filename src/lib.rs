// Downtown Directory - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod aggregator;
pub mod config;
pub mod directory;
pub mod entities;
pub mod error;
pub mod external;
pub mod logging;
pub mod repository;
pub mod seed;
pub mod sync;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::{ConfigError, DirectoryConfig};
pub use directory::Directory;
pub use entities::{
    AggregatedReview, Business, BusinessUpdate, Hours, NewBusiness, NewReview, Review, ReviewId,
};
pub use error::{DirectoryError, ErrorKind, Result};
pub use external::{
    ExternalBusiness, ExternalReview, ExternalSearch, ExternalServiceError, ReviewService,
    YelpClient,
};
pub use repository::{BusinessRepository, ALL_CATEGORIES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
