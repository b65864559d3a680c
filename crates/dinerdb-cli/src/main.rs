//! dinerdb — command-line front end for dinerdb-core
//!
//! Loads any of the four data files (customers, restaurants, favourites,
//! reviews), runs them through the validating stores, and answers one query
//! per invocation.
//!
//! Usage examples
//! --------------
//!
//! - Show how many records were admitted and blacklisted
//!   $ dinerdb --customers data/customers.csv --restaurants data/restaurants.csv stats
//!
//! - Search restaurants by name (accent- and case-insensitive)
//!   $ dinerdb --restaurants data/restaurants.csv search-restaurants "cafe rouge"
//!
//! - Ten nearest restaurants to a point
//!   $ dinerdb --restaurants data/restaurants.csv near 52.38 -1.56 -n 10
//!
//! - Mean rating of one restaurant, as JSON
//!   $ dinerdb --reviews data/reviews.csv.gz --json average --restaurant 1234567891234567
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `-v` to see rejected
//! records and resolved conflicts.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use dinerdb_core::{DataSources, DinerDb, Id, Restaurant, StoreConfig};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => {
            let config = StoreConfig::load_from_path(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            info!(path = %path.display(), ?config, "config loaded");
            config
        }
        None => StoreConfig::default(),
    };

    let mut sources = DataSources {
        customers: args.customers.clone(),
        restaurants: args.restaurants.clone(),
        favourites: args.favourites.clone(),
        reviews: args.reviews.clone(),
        ..DataSources::default()
    };
    if args.tsv {
        sources = sources.tsv();
    }

    let db = DinerDb::load(&sources, config)?;
    info!(stats = ?db.stats(), "data loaded");
    debug!(command = ?args.command, "running");
    let json = args.json;

    match args.command {
        Commands::Stats => emit(json, &db.stats(), |s| {
            println!("Database statistics (resident / blacklisted):");
            println!("  Customers:   {} / {}", s.customers, s.blacklisted_customers);
            println!("  Restaurants: {} / {}", s.restaurants, s.blacklisted_restaurants);
            println!("  Favourites:  {} / {}", s.favourites, s.blacklisted_favourites);
            println!("  Reviews:     {} / {}", s.reviews, s.blacklisted_reviews);
        })?,

        Commands::Customer { id } => match db.customers.customer(id) {
            Some(c) => {
                let favourites = db.favourites.favourites_by_customer(id);
                let reviews = db.reviews.reviews_by_customer(id);
                let view = CustomerView {
                    customer: c,
                    favourites: favourites.len(),
                    reviews: reviews.len(),
                };
                emit(json, &view, |v| {
                    println!("Customer: {} {}", v.customer.first_name(), v.customer.last_name());
                    println!("Id: {}", v.customer.id);
                    if let Some(joined) = v.customer.date_joined {
                        println!("Joined: {joined}");
                    }
                    println!("Location: {}, {}", v.customer.latitude, v.customer.longitude);
                    println!("Favourites: {}", v.favourites);
                    println!("Reviews: {}", v.reviews);
                })?
            }
            None => eprintln!("No customer found for: {id}"),
        },

        Commands::SearchCustomers { query } => {
            let hits = db.customers.customers_containing(&query);
            emit(json, &hits, |hits| {
                if hits.is_empty() {
                    println!("No customers found matching: {query}");
                }
                for c in hits {
                    println!("{} {} ({})", c.first_name(), c.last_name(), c.id);
                }
            })?
        }

        Commands::SearchRestaurants { query } => {
            let hits = db.restaurants.restaurants_containing(&query);
            emit(json, &hits, |hits| {
                if hits.is_empty() {
                    println!("No restaurants found matching: {query}");
                }
                for r in hits {
                    println!("{}", describe(r));
                }
            })?
        }

        Commands::SearchReviews { query } => {
            let hits = db.reviews.reviews_containing(&query);
            emit(json, &hits, |hits| {
                if hits.is_empty() {
                    println!("No reviews found matching: {query}");
                }
                for r in hits {
                    println!("[{}/5] {} ({})", r.rating, r.review(), r.id);
                }
            })?
        }

        Commands::Near { latitude, longitude, limit } => {
            let mut ranked = db.restaurants.restaurants_by_distance_from(latitude, longitude);
            ranked.truncate(limit);
            emit(json, &ranked, |ranked| {
                for d in ranked {
                    println!("{:>8.1} km  {}", d.distance, describe(&d.restaurant));
                }
            })?
        }

        Commands::TopFavourited => {
            let view = TopView {
                customers: db.favourites.top_customers_by_favourite_count(),
                restaurants: db.favourites.top_restaurants_by_favourite_count(),
            };
            emit(json, &view, |v| print_top(&db, v))?
        }

        Commands::TopReviewed => {
            let view = TopView {
                customers: db.reviews.top_customers_by_review_count(),
                restaurants: db.reviews.top_restaurants_by_review_count(),
            };
            emit(json, &view, |v| print_top(&db, v))?
        }

        Commands::TopRated => {
            let top = db.reviews.top_rated_restaurants();
            emit(json, &top, |top| {
                for (rank, id) in top.iter().enumerate() {
                    println!("{:>3}. {}", rank + 1, restaurant_label(&db, *id));
                }
            })?
        }

        Commands::Keywords { restaurant } => {
            let words = db.reviews.top_keywords(restaurant);
            emit(json, &words, |words| {
                if words.is_empty() {
                    println!("No keywords found for restaurant {restaurant}");
                }
                for w in words {
                    println!("{w}");
                }
            })?
        }

        Commands::Average { target } => {
            let (relation, id) = target
                .relation()
                .context("pass exactly one of --customer or --restaurant")?;
            let mean = db.reviews.average_rating(relation, id);
            emit(json, &mean, |mean| match mean {
                Some(m) => println!("{m:.2}"),
                None => println!("No reviews for {relation:?} {id}"),
            })?
        }

        Commands::Histogram { target } => {
            let (relation, id) = target
                .relation()
                .context("pass exactly one of --customer or --restaurant")?;
            let buckets = db.reviews.rating_histogram(relation, id);
            emit(json, &buckets, |buckets| {
                for (i, n) in buckets.iter().enumerate() {
                    println!("{} star: {n}", i + 1);
                }
            })?
        }

        Commands::Compare { a, b } => {
            let view = CompareView {
                common: db.favourites.common_favourite_restaurants(a, b),
                only_first: db.favourites.missing_favourite_restaurants(a, b),
                not_common: db.favourites.not_common_favourite_restaurants(a, b),
            };
            emit(json, &view, |v| {
                println!("Favourited by both:");
                for id in &v.common {
                    println!("  {}", restaurant_label(&db, *id));
                }
                println!("Favourited by {a} only:");
                for id in &v.only_first {
                    println!("  {}", restaurant_label(&db, *id));
                }
                println!("Favourited by exactly one: {}", v.not_common.len());
            })?
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints `value` as pretty JSON, or hands it to `text` for plain output.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn describe(r: &Restaurant) -> String {
    let cuisine = r.cuisine.map(|c| c.to_string()).unwrap_or_default();
    format!(
        "{} ({}) {} {}★ rating {:.1}",
        r.name(),
        r.id(),
        cuisine,
        r.warwick_stars,
        r.customer_rating
    )
}

fn restaurant_label(db: &DinerDb, id: Id) -> String {
    match db.restaurants.restaurant(id) {
        Some(r) => format!("{} ({id})", r.name()),
        None => id.to_string(),
    }
}

fn print_top(db: &DinerDb, view: &TopView) {
    println!("Customers:");
    for id in &view.customers {
        let name = db
            .customers
            .customer(*id)
            .map(|c| format!("{} {}", c.first_name(), c.last_name()))
            .unwrap_or_default();
        println!("  {id} {name}");
    }
    println!("Restaurants:");
    for id in &view.restaurants {
        println!("  {}", restaurant_label(db, *id));
    }
}

#[derive(Serialize)]
struct CustomerView<'a> {
    customer: &'a dinerdb_core::Customer,
    favourites: usize,
    reviews: usize,
}

#[derive(Serialize)]
struct TopView {
    customers: Vec<Id>,
    restaurants: Vec<Id>,
}

#[derive(Serialize)]
struct CompareView {
    common: Vec<Id>,
    only_first: Vec<Id>,
    not_common: Vec<Id>,
}
