// crates/dinerdb-core/src/store/mod.rs

//! One ordered, self-deduplicating collection per entity type.
//!
//! A [`Store`] owns its records and its [`Blacklist`]. Records only enter
//! through [`Insert::add`](crate::Insert::add) and only leave through the
//! conflict rules applied there; there is no delete.

mod customer;
mod favourite;
mod restaurant;
mod review;

use crate::config::StoreConfig;
use crate::model::{Customer, Favourite, Id, Restaurant, Review};
use crate::order::{insert_ordered, rank_by_count, sorted_by, tally};
use crate::text::search_terms;
use crate::traits::{Entity, Linked, TextMatch};
use crate::validate::Validate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub type CustomerStore = Store<Customer>;
pub type RestaurantStore = Store<Restaurant>;
pub type FavouriteStore = Store<Favourite>;
pub type ReviewStore = Store<Review>;

/// Which foreign key of a favourite or review to group or filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Customer,
    Restaurant,
}

impl Relation {
    /// The foreign id `record` carries for this relation.
    pub fn of<T: Linked>(self, record: &T) -> Id {
        match self {
            Relation::Customer => record.customer_id(),
            Relation::Restaurant => record.restaurant_id(),
        }
    }
}

/// Ids that can never be inserted again, plus the full records that were
/// pushed out by a conflict (favourites and reviews only).
///
/// Append-only for the lifetime of the owning store.
#[derive(Debug, Clone)]
pub struct Blacklist<T> {
    ids: BTreeSet<Id>,
    superseded: Vec<T>,
}

impl<T> Default for Blacklist<T> {
    fn default() -> Self {
        Blacklist {
            ids: BTreeSet::new(),
            superseded: Vec::new(),
        }
    }
}

impl<T> Blacklist<T> {
    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    /// Blacklisted ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.ids.iter().copied()
    }

    pub fn superseded(&self) -> &[T] {
        &self.superseded
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn burn(&mut self, id: Id) {
        self.ids.insert(id);
    }
}

impl<T: Entity> Blacklist<T> {
    pub(crate) fn retire(&mut self, record: T) {
        self.ids.insert(record.key());
        self.superseded.push(record);
    }
}

/// Records of one entity type, kept in canonical order.
#[derive(Debug, Clone)]
pub struct Store<T> {
    records: Vec<T>,
    blacklist: Blacklist<T>,
    config: StoreConfig,
}

impl<T: Entity> Default for Store<T> {
    fn default() -> Self {
        Store::with_config(StoreConfig::default())
    }
}

impl<T: Entity> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Store {
            records: Vec::new(),
            blacklist: Blacklist::default(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// First resident record with `id`. Linear scan.
    pub fn get(&self, id: Id) -> Option<&T> {
        self.records.iter().find(|r| r.key() == id)
    }

    /// Snapshot of every resident record in canonical order.
    pub fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Read-only view of the canonical order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn blacklist(&self) -> &Blacklist<T> {
        &self.blacklist
    }

    pub fn is_blacklisted(&self, id: Id) -> bool {
        self.blacklist.contains(id)
    }

    fn position(&self, id: Id) -> Option<usize> {
        self.records.iter().position(|r| r.key() == id)
    }

    fn place(&mut self, record: T) {
        insert_ordered(&mut self.records, record, T::canonical_cmp);
    }

    /// Resident records matching `filter`, in canonical order.
    fn filtered<F: Fn(&T) -> bool>(&self, filter: F) -> Vec<T> {
        self.records.iter().filter(|r| filter(r)).cloned().collect()
    }

    /// Records matching every sub-term of `term`, re-ordered by `cmp`.
    fn search<F>(&self, term: &str, cmp: F) -> Vec<T>
    where
        T: TextMatch,
        F: Fn(&T, &T) -> Ordering,
    {
        let terms = search_terms(term);
        if terms.is_empty() {
            return Vec::new();
        }
        let hits = self.filtered(|r| r.matches_all(&terms));
        sorted_by(&hits, cmp)
    }

    /// Rejects a record already known to be invalid or blacklisted.
    fn admissible(&self, record: &T) -> bool
    where
        T: Validate,
    {
        if !record.is_valid() {
            debug!(kind = T::KIND, id = record.key(), "rejected invalid record");
            return false;
        }
        if self.blacklist.contains(record.key()) {
            debug!(kind = T::KIND, id = record.key(), "rejected blacklisted id");
            return false;
        }
        true
    }

    /// Insertion for entities identified by their id alone.
    ///
    /// A second record with a resident id means neither can be trusted: the
    /// resident is dropped and the id burned.
    fn add_keyed(&mut self, record: T) -> bool
    where
        T: Validate,
    {
        if !self.admissible(&record) {
            return false;
        }
        let id = record.key();
        if let Some(pos) = self.position(id) {
            self.records.remove(pos);
            self.blacklist.burn(id);
            warn!(kind = T::KIND, id, "duplicate id, resident dropped and id blacklisted");
            return false;
        }
        self.place(record);
        true
    }
}

impl<T: Linked + Validate> Store<T> {
    /// Insertion for favourites and reviews.
    ///
    /// A literal id collision drops the resident and blacklists the id. A
    /// logical duplicate (same customer and restaurant under another id)
    /// keeps whichever record [`Linked::supersedes`] prefers; the loser is
    /// retired into the blacklist. On a tie the resident stays.
    fn add_linked(&mut self, record: T) -> bool {
        if !self.admissible(&record) {
            return false;
        }
        let id = record.key();

        if let Some(pos) = self.position(id) {
            let resident = self.records.remove(pos);
            warn!(kind = T::KIND, id, "duplicate id, resident dropped and id blacklisted");
            self.blacklist.retire(resident);
            self.blacklist.retire(record);
            return false;
        }

        if let Some(pos) = self.records.iter().position(|r| r.same_pair(&record)) {
            if record.supersedes(&self.records[pos]) {
                let resident = self.records.remove(pos);
                warn!(
                    kind = T::KIND,
                    kept = id,
                    dropped = resident.key(),
                    "logical duplicate, resident superseded"
                );
                self.blacklist.retire(resident);
                self.place(record);
                return true;
            }
            warn!(
                kind = T::KIND,
                kept = self.records[pos].key(),
                dropped = id,
                "logical duplicate, incoming record rejected"
            );
            self.blacklist.retire(record);
            return false;
        }

        self.place(record);
        true
    }

    /// Foreign ids ranked by how many records reference them, most first.
    /// Equal counts keep ascending id order; at most `top_k` ids.
    pub fn top_by_count(&self, relation: Relation) -> Vec<Id> {
        let groups = tally(self.records.iter().map(|r| (relation.of(r), 1)));
        rank_by_count(&groups, self.config.top_k)
    }

    /// Resident records whose `relation` id equals `id`, in canonical order.
    pub fn related_to(&self, relation: Relation, id: Id) -> Vec<T> {
        self.filtered(|r| relation.of(r) == id)
    }
}
