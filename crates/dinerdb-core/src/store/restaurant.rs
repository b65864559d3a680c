// crates/dinerdb-core/src/store/restaurant.rs
use super::Store;
use crate::distance;
use crate::model::{Id, Restaurant, RestaurantDistance};
use crate::order::sorted_by;
use crate::traits::Insert;
use crate::validate::extract_true_id;
use tracing::debug;

impl Insert<Restaurant> for Store<Restaurant> {
    /// Derives the true id from the repeated copies, then inserts under the
    /// same rules as customers.
    fn add(&mut self, mut record: Restaurant) -> bool {
        match extract_true_id(&record.repeated_id) {
            Some(id) => record.id = Some(id),
            None => {
                debug!(copies = ?record.repeated_id, "rejected restaurant, no agreed id");
                return false;
            }
        }
        self.add_keyed(record)
    }
}

impl Store<Restaurant> {
    /// All restaurants, ascending id.
    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.all()
    }

    pub fn restaurant(&self, id: Id) -> Option<&Restaurant> {
        self.get(id)
    }

    pub fn restaurants_by_id(&self, subset: &[Restaurant]) -> Vec<Restaurant> {
        sorted_by(subset, Restaurant::cmp_by_id)
    }

    pub fn restaurants_by_name(&self) -> Vec<Restaurant> {
        sorted_by(self.records(), Restaurant::cmp_by_name)
    }

    pub fn sort_restaurants_by_name(&self, subset: &[Restaurant]) -> Vec<Restaurant> {
        sorted_by(subset, Restaurant::cmp_by_name)
    }

    /// Oldest first; ties by name, then id.
    pub fn restaurants_by_date_established(&self) -> Vec<Restaurant> {
        self.sort_restaurants_by_date_established(self.records())
    }

    pub fn sort_restaurants_by_date_established(&self, subset: &[Restaurant]) -> Vec<Restaurant> {
        sorted_by(subset, Restaurant::cmp_by_date_established)
    }

    /// Restaurants holding at least one Warwick star, fewest stars first.
    pub fn restaurants_by_warwick_stars(&self) -> Vec<Restaurant> {
        let starred = self.filtered(|r| r.warwick_stars > 0);
        sorted_by(&starred, Restaurant::cmp_by_warwick_stars)
    }

    /// Highest customer rating first; ties by name, then id.
    pub fn restaurants_by_rating(&self, subset: &[Restaurant]) -> Vec<Restaurant> {
        sorted_by(subset, Restaurant::cmp_by_rating)
    }

    /// Every restaurant paired with its distance in km from the point,
    /// nearest first.
    pub fn restaurants_by_distance_from(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Vec<RestaurantDistance> {
        self.sort_restaurants_by_distance_from(self.records(), latitude, longitude)
    }

    pub fn sort_restaurants_by_distance_from(
        &self,
        subset: &[Restaurant],
        latitude: f64,
        longitude: f64,
    ) -> Vec<RestaurantDistance> {
        let mut out: Vec<RestaurantDistance> = subset
            .iter()
            .map(|r| RestaurantDistance {
                distance: distance::in_kilometres(latitude, longitude, r.latitude, r.longitude),
                restaurant: r.clone(),
            })
            .collect();
        out.sort_by(RestaurantDistance::cmp_by_distance);
        out
    }

    /// Restaurants whose name contains every word of `term`, by name.
    pub fn restaurants_containing(&self, term: &str) -> Vec<Restaurant> {
        self.search(term, Restaurant::cmp_by_name)
    }
}
