// crates/dinerdb-core/src/traits.rs
use crate::model::{Customer, Favourite, Id, Restaurant, Review};
use crate::text::contains_folded;
use std::cmp::Ordering;
use tracing::info;

/// A record type a [`Store`](crate::Store) can hold.
pub trait Entity: Clone {
    /// Lower-case label used in log events.
    const KIND: &'static str;

    /// The identifier uniqueness is enforced on.
    fn key(&self) -> Id;

    /// The order every unqualified read-all query returns.
    fn canonical_cmp(&self, other: &Self) -> Ordering;
}

impl Entity for Customer {
    const KIND: &'static str = "customer";

    fn key(&self) -> Id {
        self.id
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_id(other)
    }
}

impl Entity for Restaurant {
    const KIND: &'static str = "restaurant";

    fn key(&self) -> Id {
        self.id()
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_id(other)
    }
}

impl Entity for Favourite {
    const KIND: &'static str = "favourite";

    fn key(&self) -> Id {
        self.id
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_date(other)
    }
}

impl Entity for Review {
    const KIND: &'static str = "review";

    fn key(&self) -> Id {
        self.id
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_date(other)
    }
}

/// A record linking one customer to one restaurant.
pub trait Linked: Entity {
    fn customer_id(&self) -> Id;
    fn restaurant_id(&self) -> Id;

    /// True if the resident record should give way to `self` when both
    /// link the same pair. Ties return `false`.
    fn supersedes(&self, resident: &Self) -> bool;

    /// True if both records link the same customer to the same restaurant.
    fn same_pair(&self, other: &Self) -> bool {
        self.customer_id() == other.customer_id() && self.restaurant_id() == other.restaurant_id()
    }
}

impl Linked for Favourite {
    fn customer_id(&self) -> Id {
        self.customer_id
    }

    fn restaurant_id(&self) -> Id {
        self.restaurant_id
    }

    /// The earlier favourite wins.
    fn supersedes(&self, resident: &Self) -> bool {
        self.date_favourited < resident.date_favourited
    }
}

impl Linked for Review {
    fn customer_id(&self) -> Id {
        self.customer_id
    }

    fn restaurant_id(&self) -> Id {
        self.restaurant_id
    }

    /// The later review wins.
    fn supersedes(&self, resident: &Self) -> bool {
        self.date_reviewed > resident.date_reviewed
    }
}

/// Insertion under a store's validation and conflict rules.
pub trait Insert<T: Entity> {
    /// Returns `true` iff `record` is resident afterwards.
    fn add(&mut self, record: T) -> bool;

    /// Inserts every record in order and returns `true` iff all succeeded.
    ///
    /// Earlier successes stay in place when a later record fails.
    fn add_all<I>(&mut self, records: I) -> bool
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let (mut seen, mut admitted) = (0usize, 0usize);
        for record in records {
            seen += 1;
            if self.add(record) {
                admitted += 1;
            }
        }
        info!(kind = T::KIND, seen, admitted, "bulk insert finished");
        admitted == seen
    }
}

/// Accent- and case-insensitive substring matching for search queries.
///
/// Terms passed in are already folded (see [`crate::text::search_terms`]).
pub trait TextMatch {
    /// True if one sub-term occurs in the record's searchable text.
    fn matches_term(&self, term: &str) -> bool;

    /// True if every sub-term matches. No terms never match.
    fn matches_all(&self, terms: &[String]) -> bool {
        !terms.is_empty() && terms.iter().all(|t| self.matches_term(t))
    }
}

impl TextMatch for Customer {
    fn matches_term(&self, term: &str) -> bool {
        contains_folded(self.first_name(), term) || contains_folded(self.last_name(), term)
    }
}

impl TextMatch for Restaurant {
    fn matches_term(&self, term: &str) -> bool {
        contains_folded(self.name(), term)
    }
}

impl TextMatch for Review {
    fn matches_term(&self, term: &str) -> bool {
        contains_folded(self.review(), term)
    }
}
