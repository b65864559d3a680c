use clap::{Args, Parser, Subcommand};
use dinerdb_core::{Id, Relation};
use std::path::PathBuf;

/// CLI arguments for dinerdb
#[derive(Debug, Parser)]
#[command(
    name = "dinerdb",
    version,
    about = "CLI for loading and querying customer, restaurant, favourite and review data"
)]
pub struct CliArgs {
    /// Customers file (CSV/TSV, optionally .gz)
    #[arg(long, global = true)]
    pub customers: Option<PathBuf>,

    /// Restaurants file
    #[arg(long, global = true)]
    pub restaurants: Option<PathBuf>,

    /// Favourites file
    #[arg(long, global = true)]
    pub favourites: Option<PathBuf>,

    /// Reviews file
    #[arg(long, global = true)]
    pub reviews: Option<PathBuf>,

    /// JSON file with store settings (top_k, keyword_top_k, vocabulary)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Read every input file as tab-separated (default: inferred from .tsv/.csv)
    #[arg(long, global = true)]
    pub tsv: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log rejected records and conflicts (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show resident and blacklisted counts per store
    Stats,

    /// Show one customer with their favourites and reviews
    Customer {
        id: Id,
    },

    /// Search customers by first or last name
    SearchCustomers {
        query: String,
    },

    /// Search restaurants by name
    SearchRestaurants {
        query: String,
    },

    /// Search review text
    SearchReviews {
        query: String,
    },

    /// Restaurants nearest to a point
    Near {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        /// How many restaurants to list
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Customers and restaurants with the most favourites
    TopFavourited,

    /// Customers and restaurants with the most reviews
    TopReviewed,

    /// Restaurants with the best mean rating
    TopRated,

    /// Most frequent sentiment words in a restaurant's reviews
    Keywords {
        restaurant: Id,
    },

    /// Mean review rating of a customer or restaurant
    Average {
        #[command(flatten)]
        target: Target,
    },

    /// Review count per rating (1..5) of a customer or restaurant
    Histogram {
        #[command(flatten)]
        target: Target,
    },

    /// Compare the favourite restaurants of two customers
    Compare {
        a: Id,
        b: Id,
    },
}

/// Exactly one of `--customer` / `--restaurant`.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct Target {
    #[arg(long)]
    pub customer: Option<Id>,

    #[arg(long)]
    pub restaurant: Option<Id>,
}

impl Target {
    /// The chosen relation and id; `None` unless exactly one flag is set.
    pub fn relation(&self) -> Option<(Relation, Id)> {
        match (self.customer, self.restaurant) {
            (Some(id), None) => Some((Relation::Customer, id)),
            (None, Some(id)) => Some((Relation::Restaurant, id)),
            _ => None,
        }
    }
}
