// crates/dinerdb-core/tests/store_protocol.rs
mod common;

use common::{customer, favourite, restaurant, review, vid};
use dinerdb_core::validate::{extract_true_id, is_valid_id};
use dinerdb_core::{
    CustomerStore, Entity, FavouriteStore, Id, Insert, RestaurantStore, ReviewStore, StoreConfig,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn keys<T: Entity>(records: &[T]) -> Vec<Id> {
    records.iter().map(Entity::key).collect()
}

fn all_unique(ids: &[Id]) -> bool {
    ids.iter().collect::<BTreeSet<_>>().len() == ids.len()
}

#[test]
fn id_validity_examples() {
    assert!(!is_valid_id(1111222233334444));
    assert!(!is_valid_id(1234567890123456));
    assert!(is_valid_id(1234567891234567));
}

#[test]
fn true_id_majority_vote_examples() {
    assert_eq!(extract_true_id(&["5", "5", "7"]), Some(5));
    assert_eq!(extract_true_id(&["5", "7", "9"]), None);
}

#[test]
fn restaurants_come_back_in_id_order() {
    let mut store = RestaurantStore::new();
    for id in [vid(30), vid(10), vid(20)] {
        assert!(store.add(restaurant(id, "Trattoria")));
    }
    assert_eq!(keys(&store.restaurants()), [vid(10), vid(20), vid(30)]);
}

#[test]
fn literal_duplicate_customer_is_burned_for_good() {
    let x = vid(0);
    let mut store = CustomerStore::new();
    assert!(store.add(customer(x, "Ann", "Lee")));
    assert!(!store.add(customer(x, "Ann", "Lee")));
    assert!(store.get(x).is_none());
    assert!(store.is_blacklisted(x));
    assert!(!store.add(customer(x, "Ann", "Lee")));
    assert!(store.get(x).is_none());
}

#[test]
fn earlier_favourite_survives_either_arrival_order() {
    let (c, r) = (vid(1), vid(2));
    let early = favourite(vid(10), c, r, 3);
    let late = favourite(vid(11), c, r, 9);

    let mut store = FavouriteStore::new();
    assert!(store.add(early.clone()));
    assert!(!store.add(late.clone()));
    assert_eq!(store.favourites(), [early.clone()]);
    assert!(store.is_blacklisted(late.id));

    let mut store = FavouriteStore::new();
    assert!(store.add(late.clone()));
    assert!(store.add(early.clone()));
    assert_eq!(store.favourites(), [early]);
    assert!(store.is_blacklisted(late.id));
    assert_eq!(store.blacklist().superseded(), [late]);
}

#[test]
fn favourite_date_tie_keeps_resident() {
    let (c, r) = (vid(1), vid(2));
    let mut store = FavouriteStore::new();
    assert!(store.add(favourite(vid(10), c, r, 5)));
    assert!(!store.add(favourite(vid(11), c, r, 5)));
    assert_eq!(keys(&store.favourites()), [vid(10)]);
    assert!(store.is_blacklisted(vid(11)));
}

#[test]
fn literal_review_id_collision_drops_both() {
    let id = vid(5);
    let mut store = ReviewStore::new();
    assert!(store.add(review(id, vid(1), vid(2), 1, "ok", 3)));
    assert!(!store.add(review(id, vid(3), vid(4), 2, "yummy", 5)));
    assert!(store.is_empty());
    assert!(store.is_blacklisted(id));
    assert!(!store.add(review(id, vid(6), vid(7), 3, "fine", 4)));
}

#[test]
fn keyword_ranking_breaks_ties_deterministically() {
    let config = StoreConfig {
        vocabulary: Some(
            ["bland", "excellent", "food", "service"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        ),
        ..StoreConfig::default()
    };
    let r = vid(2);
    let mut store = ReviewStore::with_config(config);
    assert!(store.add_all([
        review(vid(10), vid(20), r, 1, "excellent service", 5),
        review(vid(11), vid(21), r, 2, "excellent food", 5),
        review(vid(12), vid(22), r, 3, "bland food", 2),
    ]));
    assert_eq!(store.top_keywords(r), ["excellent", "food", "bland", "service"]);
}

#[test]
fn builtin_vocabulary_ignores_ordinary_words() {
    let r = vid(2);
    let mut store = ReviewStore::new();
    store.add_all([
        review(vid(10), vid(20), r, 1, "excellent service", 5),
        review(vid(11), vid(21), r, 2, "excellent food", 5),
        review(vid(12), vid(22), r, 3, "bland food", 2),
    ]);
    assert_eq!(store.top_keywords(r), ["excellent", "bland"]);
}

#[test]
fn bulk_insert_keeps_partial_progress() {
    let mut store = CustomerStore::new();
    let mut bad = customer(vid(1), "Bad", "Coords");
    bad.longitude = 0.0;
    let ok = store.add_all([customer(vid(0), "Ann", "Lee"), bad, customer(vid(2), "Bo", "Ray")]);
    assert!(!ok);
    assert_eq!(keys(&store.customers()), [vid(0), vid(2)]);
}

#[test]
fn blank_search_finds_nothing() {
    let mut store = CustomerStore::new();
    store.add(customer(vid(0), "Ann", "Lee"));
    assert!(store.customers_containing("").is_empty());
    assert!(store.customers_containing(" \t ").is_empty());
    assert_eq!(store.customers_containing("an le").len(), 1);
}

#[test]
fn reinserting_a_snapshot_reproduces_the_order() {
    let mut favourites = FavouriteStore::new();
    favourites.add_all([
        favourite(vid(10), vid(1), vid(2), 4),
        favourite(vid(11), vid(1), vid(3), 4),
        favourite(vid(12), vid(4), vid(2), 7),
        favourite(vid(13), vid(4), vid(3), 1),
    ]);
    let snapshot = favourites.favourites();
    let mut fresh = FavouriteStore::new();
    assert!(fresh.add_all(snapshot.clone()));
    assert_eq!(fresh.favourites(), snapshot);
    assert_eq!(keys(&snapshot), [vid(12), vid(11), vid(10), vid(13)]);

    let mut customers = CustomerStore::new();
    customers.add_all([
        customer(vid(9), "C", "C"),
        customer(vid(3), "A", "A"),
        customer(vid(6), "B", "B"),
    ]);
    let snapshot = customers.customers();
    let mut fresh = CustomerStore::new();
    assert!(fresh.add_all(snapshot.clone()));
    assert_eq!(fresh.customers(), snapshot);
}

#[test]
fn top_k_results_are_short_not_padded() {
    let mut store = FavouriteStore::with_config(StoreConfig {
        top_k: 2,
        ..StoreConfig::default()
    });
    store.add_all([
        favourite(vid(10), vid(1), vid(5), 1),
        favourite(vid(11), vid(2), vid(5), 2),
        favourite(vid(12), vid(2), vid(6), 3),
        favourite(vid(13), vid(3), vid(7), 4),
    ]);
    assert_eq!(store.top_customers_by_favourite_count(), [vid(2), vid(1)]);

    let empty = FavouriteStore::new();
    assert!(empty.top_restaurants_by_favourite_count().is_empty());
}

/// Reference model of the customer insert rules.
#[derive(Default)]
struct Model {
    resident: BTreeSet<Id>,
    burned: BTreeSet<Id>,
}

impl Model {
    fn add(&mut self, id: Id, valid: bool) -> bool {
        if !valid || self.burned.contains(&id) {
            return false;
        }
        if self.resident.remove(&id) {
            self.burned.insert(id);
            return false;
        }
        self.resident.insert(id);
        true
    }
}

proptest! {
    #[test]
    fn customer_store_matches_model(
        ops in prop::collection::vec((0usize..6, any::<bool>()), 0..40),
    ) {
        let ids: Vec<Id> = (0..6).map(vid).collect();
        let mut store = CustomerStore::new();
        let mut model = Model::default();

        for (slot, valid) in ops {
            let id = ids[slot];
            let mut record = customer(id, "Pat", "Doe");
            if !valid {
                record.latitude = 0.0;
            }
            let was_burned = store.is_blacklisted(id);
            let added = store.add(record);
            prop_assert_eq!(added, model.add(id, valid));
            if was_burned {
                prop_assert!(!added);
                prop_assert!(store.is_blacklisted(id));
            }
            let resident = keys(store.records());
            prop_assert!(all_unique(&resident));
            prop_assert!(resident.windows(2).all(|w| w[0] < w[1]));
        }
        let resident: Vec<Id> = model.resident.iter().copied().collect();
        let burned: Vec<Id> = model.burned.iter().copied().collect();
        prop_assert_eq!(keys(store.records()), resident);
        prop_assert_eq!(store.blacklist().ids().collect::<Vec<_>>(), burned);
    }

    #[test]
    fn favourites_stay_unique_and_blacklist_is_permanent(
        ops in prop::collection::vec((0usize..8, 0usize..3, 0usize..3, 1u32..10), 0..40)
    ) {
        let ids: Vec<Id> = (0..14).map(vid).collect();
        let mut store = FavouriteStore::new();
        let mut ever_blacklisted = BTreeSet::new();

        for (id_slot, c_slot, r_slot, d) in ops {
            let record = favourite(ids[id_slot], ids[8 + c_slot], ids[11 + r_slot], d);
            let was_blacklisted = store.is_blacklisted(record.id);
            let added = store.add(record);
            if was_blacklisted {
                prop_assert!(!added);
            }

            let resident = store.favourites();
            prop_assert!(all_unique(&keys(&resident)));
            let pairs: BTreeSet<(Id, Id)> =
                resident.iter().map(|f| (f.customer_id, f.restaurant_id)).collect();
            prop_assert_eq!(pairs.len(), resident.len());
            for f in &resident {
                prop_assert!(!store.is_blacklisted(f.id));
            }

            for id in &ever_blacklisted {
                prop_assert!(store.is_blacklisted(*id));
            }
            ever_blacklisted.extend(store.blacklist().ids());
        }
    }
}
