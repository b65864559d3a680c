// crates/dinerdb-core/src/model/mod.rs
pub mod domain;
pub mod kinds;

pub use domain::{Customer, Favourite, Id, Restaurant, RestaurantDistance, Review};
pub use kinds::{Cuisine, EstablishmentType, PriceRange};

/// Date layout used by every date column (`yyyy-MM-dd HH:mm:ss`).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
