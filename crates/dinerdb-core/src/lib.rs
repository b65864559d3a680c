// crates/dinerdb-core/src/lib.rs

//! In-memory store for customers, restaurants, favourites and reviews.
//!
//! Records are validated and deduplicated on insertion, kept in a fixed
//! order per store, and queried through sorting, search, distance and
//! aggregation helpers.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dinerdb_core::{Customer, CustomerStore, Insert};
//!
//! let joined = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let mut store = CustomerStore::new();
//! assert!(store.add(Customer::new(1234567891234567, "Ann", "Lee", joined, 52.4, -1.5)));
//! assert!(!store.add(Customer::new(1234567891234567, "Ann", "Lee", joined, 52.4, -1.5)));
//! assert!(store.is_empty());
//! assert!(store.is_blacklisted(1234567891234567));
//! ```

pub mod common;
pub mod config;
pub mod distance;
pub mod error;
pub mod keywords;
pub mod loader; // The record loader (rows -> records)
pub mod model;
pub mod order; // Comparator plumbing + top-K aggregation
pub mod store;
pub mod text;
pub mod traits;
pub mod validate;

// Re-exports
pub use crate::common::{DbStats, DinerDb};
pub use crate::config::StoreConfig;
pub use crate::error::{DinerError, Result};
pub use crate::loader::DataSources;
// Export the Model Types
pub use model::{
    Cuisine, Customer, EstablishmentType, Favourite, Id, PriceRange, Restaurant,
    RestaurantDistance, Review,
};
pub use store::{
    Blacklist, CustomerStore, FavouriteStore, Relation, RestaurantStore, ReviewStore, Store,
};
// Export the Store Traits (Crucial for users!)
pub use crate::traits::{Entity, Insert, Linked, TextMatch};
pub use crate::validate::Validate;
