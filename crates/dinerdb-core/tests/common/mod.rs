// crates/dinerdb-core/tests/common/mod.rs
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use dinerdb_core::validate::is_valid_id;
use dinerdb_core::{
    Cuisine, Customer, EstablishmentType, Favourite, Id, PriceRange, Restaurant, Review,
};

/// The `n`-th valid id at or above 1234567891234567, ascending in `n`.
pub fn vid(n: usize) -> Id {
    (1_234_567_891_234_567u64..)
        .filter(|id| is_valid_id(*id))
        .nth(n)
        .unwrap()
}

pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn customer(id: Id, first: &str, last: &str) -> Customer {
    Customer::new(id, first, last, day(1), 52.38, -1.56)
}

/// A restaurant whose three id copies all agree on `id`.
pub fn restaurant(id: Id, name: &str) -> Restaurant {
    let copy = id.to_string();
    Restaurant {
        repeated_id: vec![copy.clone(), copy.clone(), copy],
        name: Some(name.to_owned()),
        owner_first_name: Some("Sam".to_owned()),
        owner_last_name: Some("Cook".to_owned()),
        cuisine: Some(Cuisine::Italian),
        establishment_type: Some(EstablishmentType::Restaurant),
        price_range: Some(PriceRange::Moderate),
        date_established: Some(day(2)),
        latitude: 52.28,
        longitude: -1.58,
        last_inspected_date: Some(day(3)),
        food_inspection_rating: 5,
        warwick_stars: 1,
        customer_rating: 4.0,
        ..Restaurant::default()
    }
}

pub fn favourite(id: Id, customer: Id, restaurant: Id, d: u32) -> Favourite {
    Favourite::new(id, customer, restaurant, day(d))
}

pub fn review(id: Id, customer: Id, restaurant: Id, d: u32, body: &str, rating: u8) -> Review {
    Review::new(id, customer, restaurant, day(d), body, rating)
}
