// crates/dinerdb-core/src/common.rs
use crate::config::StoreConfig;
use crate::error::Result;
use crate::loader::{self, DataSources};
use crate::store::{CustomerStore, FavouriteStore, RestaurantStore, ReviewStore, Store};
use crate::traits::{Entity, Insert};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Resident and blacklisted record counts per store.
///
/// Returned by [`DinerDb::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub customers: usize,
    pub restaurants: usize,
    pub favourites: usize,
    pub reviews: usize,
    pub blacklisted_customers: usize,
    pub blacklisted_restaurants: usize,
    pub blacklisted_favourites: usize,
    pub blacklisted_reviews: usize,
}

/// The four stores side by side, sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct DinerDb {
    pub customers: CustomerStore,
    pub restaurants: RestaurantStore,
    pub favourites: FavouriteStore,
    pub reviews: ReviewStore,
}

impl DinerDb {
    pub fn new(config: StoreConfig) -> Self {
        DinerDb {
            customers: Store::with_config(config.clone()),
            restaurants: Store::with_config(config.clone()),
            favourites: Store::with_config(config.clone()),
            reviews: Store::with_config(config),
        }
    }

    /// Reads every configured file and bulk-inserts its records.
    ///
    /// CSV and TSV files can be mixed; see [`DataSources::delimiter_for`].
    ///
    /// Rejected records and malformed rows are logged, not returned; only
    /// I/O failures make the load fail.
    ///
    /// ```no_run
    /// use dinerdb_core::loader::DataSources;
    /// use dinerdb_core::{DinerDb, StoreConfig};
    ///
    /// let sources = DataSources {
    ///     customers: Some("data/customers.csv".into()),
    ///     reviews: Some("data/reviews.tsv.gz".into()),
    ///     ..DataSources::default()
    /// };
    /// let db = DinerDb::load(&sources, StoreConfig::default()).unwrap();
    /// println!("{:?}", db.stats());
    /// ```
    pub fn load(sources: &DataSources, config: StoreConfig) -> Result<Self> {
        let mut db = DinerDb::new(config);
        if let Some(path) = &sources.customers {
            let delim = sources.delimiter_for(path);
            fill(&mut db.customers, path, delim, loader::parse_customer)?;
        }
        if let Some(path) = &sources.restaurants {
            let delim = sources.delimiter_for(path);
            fill(&mut db.restaurants, path, delim, loader::parse_restaurant)?;
        }
        if let Some(path) = &sources.favourites {
            let delim = sources.delimiter_for(path);
            fill(&mut db.favourites, path, delim, loader::parse_favourite)?;
        }
        if let Some(path) = &sources.reviews {
            let delim = sources.delimiter_for(path);
            fill(&mut db.reviews, path, delim, |row| loader::parse_review(row, delim))?;
        }

        info!(stats = ?db.stats(), "database loaded");
        Ok(db)
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            customers: self.customers.len(),
            restaurants: self.restaurants.len(),
            favourites: self.favourites.len(),
            reviews: self.reviews.len(),
            blacklisted_customers: self.customers.blacklist().len(),
            blacklisted_restaurants: self.restaurants.blacklist().len(),
            blacklisted_favourites: self.favourites.blacklist().len(),
            blacklisted_reviews: self.reviews.blacklist().len(),
        }
    }
}

fn fill<T, F>(store: &mut Store<T>, path: &Path, delimiter: char, parse: F) -> Result<()>
where
    T: Entity,
    Store<T>: Insert<T>,
    F: Fn(&loader::Row) -> Result<T>,
{
    let records = loader::read_file(path, delimiter, parse)?;
    store.add_all(records);
    Ok(())
}
