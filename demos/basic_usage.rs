//! Basic usage example for dinerdb-rs
//!
//! This example demonstrates how to:
//! - Insert records and watch the conflict rules at work
//! - Read a store in its canonical order
//! - Run the aggregation queries over reviews

use chrono::NaiveDate;
use dinerdb_rs::prelude::*;

const ANN: Id = 1234567891234567;
const BO: Id = 1234567891234568;
const TRATTORIA: Id = 1234567891234569;
const NOODLES: Id = 1234567891234571;

fn at(day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, day)
        .and_then(|d| d.and_hms_opt(19, 30, 0))
        .unwrap_or_default()
}

fn main() -> Result<()> {
    println!("=== dinerdb-rs Basic Usage Example ===\n");

    let mut db = DinerDb::new(StoreConfig::default());

    // Customers: a second record with a resident id burns that id.
    println!("--- Customers ---");
    let ann = Customer::new(ANN, "Ann", "Lee", at(1), 52.38, -1.56);
    println!("insert Ann:         {}", db.customers.add(ann.clone()));
    println!("insert Ann again:   {}", db.customers.add(ann.clone()));
    println!("insert Ann a third: {}", db.customers.add(ann));
    let bo = Customer::new(BO, "Bo", "Ray", at(2), 52.29, -1.53);
    println!("insert Bo:          {}", db.customers.add(bo));
    println!("resident: {:?}\n", db.customers.customers().iter().map(|c| c.id).collect::<Vec<_>>());

    // Restaurants arrive with three copies of their id; two agreeing copies win.
    println!("--- Restaurants ---");
    for (id, name, lat) in [(NOODLES, "Noodle Bar", 52.41), (TRATTORIA, "Trattoria", 52.28)] {
        let copy = id.to_string();
        let restaurant = Restaurant {
            repeated_id: vec![copy.clone(), "9".repeat(16), copy],
            name: Some(name.to_owned()),
            owner_first_name: Some("Sam".into()),
            owner_last_name: Some("Cook".into()),
            cuisine: Some(dinerdb_rs::Cuisine::Italian),
            establishment_type: Some(dinerdb_rs::EstablishmentType::Restaurant),
            price_range: Some(dinerdb_rs::PriceRange::Moderate),
            date_established: Some(at(3)),
            latitude: lat,
            longitude: -1.55,
            last_inspected_date: Some(at(4)),
            food_inspection_rating: 5,
            warwick_stars: 2,
            ..Restaurant::default()
        };
        println!("insert {name}: {}", db.restaurants.add(restaurant));
    }
    for d in db.restaurants.restaurants_by_distance_from(52.38, -1.56) {
        println!("{:>6.1} km  {}", d.distance, d.restaurant.name());
    }
    println!();

    // Reviews: a later review of the same pair replaces the earlier one.
    println!("--- Reviews ---");
    db.reviews.add_all([
        Review::new(1234567891234572, BO, TRATTORIA, at(5), "bland and cold", 2),
        Review::new(1234567891234573, BO, TRATTORIA, at(9), "excellent now, sublime pasta", 5),
        Review::new(1234567891234574, BO, NOODLES, at(6), "yummy and excellent", 4),
    ]);
    println!("resident reviews: {}", db.reviews.len());
    println!("superseded:       {}", db.reviews.blacklist().superseded().len());
    println!("Bo's average:     {:?}", db.reviews.average_rating(Relation::Customer, BO));
    println!("top rated:        {:?}", db.reviews.top_rated_restaurants());
    println!("keywords:         {:?}", db.reviews.top_keywords(NOODLES));
    println!("\n{:#?}", db.stats());

    Ok(())
}
