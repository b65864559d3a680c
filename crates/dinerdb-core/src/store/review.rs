// crates/dinerdb-core/src/store/review.rs
use super::{Relation, Store};
use crate::model::{Id, Review};
use crate::order::{rank_by_count, rank_by_mean, sorted_by, tally};
use crate::traits::Insert;

impl Insert<Review> for Store<Review> {
    fn add(&mut self, record: Review) -> bool {
        self.add_linked(record)
    }
}

impl Store<Review> {
    /// All reviews, newest first.
    pub fn reviews(&self) -> Vec<Review> {
        self.all()
    }

    pub fn review(&self, id: Id) -> Option<&Review> {
        self.get(id)
    }

    pub fn reviews_by_id(&self, subset: &[Review]) -> Vec<Review> {
        sorted_by(subset, Review::cmp_by_id)
    }

    /// Highest rating first, then newest, then id.
    pub fn reviews_by_rating(&self, subset: &[Review]) -> Vec<Review> {
        sorted_by(subset, Review::cmp_by_rating)
    }

    pub fn reviews_by_customer(&self, customer_id: Id) -> Vec<Review> {
        self.related_to(Relation::Customer, customer_id)
    }

    pub fn reviews_by_restaurant(&self, restaurant_id: Id) -> Vec<Review> {
        self.related_to(Relation::Restaurant, restaurant_id)
    }

    pub fn top_customers_by_review_count(&self) -> Vec<Id> {
        self.top_by_count(Relation::Customer)
    }

    pub fn top_restaurants_by_review_count(&self) -> Vec<Id> {
        self.top_by_count(Relation::Restaurant)
    }

    /// Restaurants by mean rating (scaled by 100, truncated), best first.
    pub fn top_rated_restaurants(&self) -> Vec<Id> {
        let groups = tally(
            self.records()
                .iter()
                .map(|r| (r.restaurant_id, u64::from(r.rating))),
        );
        rank_by_mean(&groups, self.config().top_k)
    }

    /// Most frequent vocabulary words across one restaurant's reviews.
    ///
    /// Bodies are split on whitespace and tokens must equal a vocabulary
    /// word exactly. Equal counts come out alphabetically.
    pub fn top_keywords(&self, restaurant_id: Id) -> Vec<String> {
        let checker = self.config().keyword_checker();
        let reviews = self.reviews_by_restaurant(restaurant_id);
        let tokens = reviews
            .iter()
            .flat_map(|r| r.review().split_whitespace())
            .filter(|token| checker.is_keyword(token))
            .map(|token| (token.to_owned(), 1));
        rank_by_count(&tally(tokens), self.config().keyword_top_k)
    }

    /// Mean rating of the matching reviews; `None` when there are none.
    pub fn average_rating(&self, relation: Relation, id: Id) -> Option<f64> {
        let matching = self.related_to(relation, id);
        if matching.is_empty() {
            return None;
        }
        let sum: u32 = matching.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / matching.len() as f64)
    }

    /// Matching reviews counted per rating; slot `i` holds rating `i + 1`.
    pub fn rating_histogram(&self, relation: Relation, id: Id) -> [u32; 5] {
        let mut buckets = [0u32; 5];
        for review in self.records().iter().filter(|r| relation.of(*r) == id) {
            if let Some(slot) = usize::from(review.rating).checked_sub(1) {
                if let Some(bucket) = buckets.get_mut(slot) {
                    *bucket += 1;
                }
            }
        }
        buckets
    }

    /// Reviews whose body contains every word of `term`, newest first.
    pub fn reviews_containing(&self, term: &str) -> Vec<Review> {
        self.search(term, Review::cmp_by_date)
    }
}
