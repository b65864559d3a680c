// crates/dinerdb-core/src/store/favourite.rs
use super::{Relation, Store};
use crate::model::{Favourite, Id};
use crate::order::{common_ids, exclusive_ids, sorted_by, symmetric_difference};
use crate::traits::Insert;

impl Insert<Favourite> for Store<Favourite> {
    fn add(&mut self, record: Favourite) -> bool {
        self.add_linked(record)
    }
}

impl Store<Favourite> {
    /// All favourites, newest first.
    pub fn favourites(&self) -> Vec<Favourite> {
        self.all()
    }

    pub fn favourite(&self, id: Id) -> Option<&Favourite> {
        self.get(id)
    }

    pub fn favourites_by_id(&self, subset: &[Favourite]) -> Vec<Favourite> {
        sorted_by(subset, Favourite::cmp_by_id)
    }

    pub fn favourites_by_customer_id(&self) -> Vec<Favourite> {
        sorted_by(self.records(), Favourite::cmp_by_customer_id)
    }

    pub fn favourites_by_restaurant_id(&self) -> Vec<Favourite> {
        sorted_by(self.records(), Favourite::cmp_by_restaurant_id)
    }

    /// Favourites made by one customer, newest first.
    pub fn favourites_by_customer(&self, customer_id: Id) -> Vec<Favourite> {
        self.related_to(Relation::Customer, customer_id)
    }

    /// Favourites of one restaurant, newest first.
    pub fn favourites_by_restaurant(&self, restaurant_id: Id) -> Vec<Favourite> {
        self.related_to(Relation::Restaurant, restaurant_id)
    }

    fn favourite_restaurant_ids(&self, customer_id: Id) -> Vec<Id> {
        self.favourites_by_customer(customer_id)
            .iter()
            .map(|f| f.restaurant_id)
            .collect()
    }

    /// Restaurants both customers favourited, in `a`'s newest-first order.
    pub fn common_favourite_restaurants(&self, a: Id, b: Id) -> Vec<Id> {
        common_ids(&self.favourite_restaurant_ids(a), &self.favourite_restaurant_ids(b))
    }

    /// Restaurants `a` favourited that `b` did not.
    pub fn missing_favourite_restaurants(&self, a: Id, b: Id) -> Vec<Id> {
        exclusive_ids(&self.favourite_restaurant_ids(a), &self.favourite_restaurant_ids(b))
    }

    /// Restaurants exactly one of the two customers favourited: `a`'s
    /// exclusive ones first, then `b`'s.
    pub fn not_common_favourite_restaurants(&self, a: Id, b: Id) -> Vec<Id> {
        symmetric_difference(&self.favourite_restaurant_ids(a), &self.favourite_restaurant_ids(b))
    }

    pub fn top_customers_by_favourite_count(&self) -> Vec<Id> {
        self.top_by_count(Relation::Customer)
    }

    pub fn top_restaurants_by_favourite_count(&self) -> Vec<Id> {
        self.top_by_count(Relation::Restaurant)
    }
}
