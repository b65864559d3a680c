//! dinerdb-rs
//! ==========
//!
//! Umbrella crate for the dinerdb workspace. It re-exports
//! [`dinerdb_core`] and offers a [`prelude`] for the demos.

pub use dinerdb_core::*;

/// Everything a typical caller needs in one import.
pub mod prelude {
    pub use dinerdb_core::loader::DataSources;
    pub use dinerdb_core::{
        Customer, DinerDb, DinerError, Favourite, Id, Insert, Relation, Restaurant, Result,
        Review, StoreConfig, TextMatch,
    };
}
