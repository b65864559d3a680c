// crates/dinerdb-core/src/model/domain.rs
use super::kinds::{Cuisine, EstablishmentType, PriceRange};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Identifier shared by every entity. Only 16-digit values pass validation.
pub type Id = u64;

/// A registered customer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Id,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_joined: Option<NaiveDateTime>,
    pub latitude: f64,
    pub longitude: f64,
}

/// A restaurant as delivered by the loader.
///
/// `id` stays `None` until the store derives the true identifier from
/// `repeated_id` during insertion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Option<Id>,
    pub repeated_id: Vec<String>,
    pub name: Option<String>,
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub cuisine: Option<Cuisine>,
    pub establishment_type: Option<EstablishmentType>,
    pub price_range: Option<PriceRange>,
    pub date_established: Option<NaiveDateTime>,
    pub latitude: f64,
    pub longitude: f64,
    pub vegan_options: bool,
    pub has_table_service: bool,
    pub has_alcohol_licence: bool,
    pub has_wifi: bool,
    pub has_disabled_access: bool,
    pub has_online_ordering: bool,
    pub last_inspected_date: Option<NaiveDateTime>,
    /// 0..=5
    pub food_inspection_rating: i32,
    /// 0..=3
    pub warwick_stars: i32,
    /// 0.0 (unrated) or 1.0..=5.0
    pub customer_rating: f32,
}

/// A customer marking a restaurant as a favourite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourite {
    pub id: Id,
    pub customer_id: Id,
    pub restaurant_id: Id,
    pub date_favourited: Option<NaiveDateTime>,
}

/// A customer's review of a restaurant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Id,
    pub customer_id: Id,
    pub restaurant_id: Id,
    pub date_reviewed: Option<NaiveDateTime>,
    pub review: Option<String>,
    /// 1..=5; 0 means absent.
    pub rating: u8,
}

/// A restaurant paired with its distance (km) from a query point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDistance {
    pub restaurant: Restaurant,
    pub distance: f64,
}

impl Customer {
    pub fn new(
        id: Id,
        first_name: &str,
        last_name: &str,
        date_joined: NaiveDateTime,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Customer {
            id,
            first_name: Some(first_name.to_owned()),
            last_name: Some(last_name.to_owned()),
            date_joined: Some(date_joined),
            latitude,
            longitude,
        }
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("")
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or("")
    }

    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }

    /// Last name, then first name, then id.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.last_name()
            .cmp(other.last_name())
            .then_with(|| self.first_name().cmp(other.first_name()))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl Restaurant {
    /// Cuts a raw repeated-id field into its three copies.
    ///
    /// A field whose length is not a multiple of three comes back as a
    /// single piece so that true-id derivation rejects it.
    pub fn split_repeated_id(raw: &str) -> Vec<String> {
        let raw = raw.trim();
        let len = raw.chars().count();
        if len == 0 || len % 3 != 0 {
            return vec![raw.to_owned()];
        }
        let chars: Vec<char> = raw.chars().collect();
        chars
            .chunks(len / 3)
            .map(|c| c.iter().collect())
            .collect()
    }

    /// Canonical id, or 0 before insertion assigned one.
    pub fn id(&self) -> Id {
        self.id.unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn owner_first_name(&self) -> &str {
        self.owner_first_name.as_deref().unwrap_or("")
    }

    pub fn owner_last_name(&self) -> &str {
        self.owner_last_name.as_deref().unwrap_or("")
    }

    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }

    /// Name, then id.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| self.cmp_by_id(other))
    }

    /// Oldest first, then name, then id.
    pub fn cmp_by_date_established(&self, other: &Self) -> Ordering {
        self.date_established
            .cmp(&other.date_established)
            .then_with(|| self.cmp_by_name(other))
    }

    /// Fewest stars first, then name, then id.
    pub fn cmp_by_warwick_stars(&self, other: &Self) -> Ordering {
        self.warwick_stars
            .cmp(&other.warwick_stars)
            .then_with(|| self.cmp_by_name(other))
    }

    /// Highest customer rating first, then name, then id.
    pub fn cmp_by_rating(&self, other: &Self) -> Ordering {
        other
            .customer_rating
            .total_cmp(&self.customer_rating)
            .then_with(|| self.cmp_by_name(other))
    }
}

impl Favourite {
    pub fn new(id: Id, customer_id: Id, restaurant_id: Id, date_favourited: NaiveDateTime) -> Self {
        Favourite {
            id,
            customer_id,
            restaurant_id,
            date_favourited: Some(date_favourited),
        }
    }

    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }

    /// Newest first, then the larger id.
    pub fn cmp_by_date(&self, other: &Self) -> Ordering {
        other
            .date_favourited
            .cmp(&self.date_favourited)
            .then_with(|| other.id.cmp(&self.id))
    }

    pub fn cmp_by_customer_id(&self, other: &Self) -> Ordering {
        self.customer_id
            .cmp(&other.customer_id)
            .then_with(|| self.id.cmp(&other.id))
    }

    pub fn cmp_by_restaurant_id(&self, other: &Self) -> Ordering {
        self.restaurant_id
            .cmp(&other.restaurant_id)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl Review {
    pub fn new(
        id: Id,
        customer_id: Id,
        restaurant_id: Id,
        date_reviewed: NaiveDateTime,
        review: &str,
        rating: u8,
    ) -> Self {
        Review {
            id,
            customer_id,
            restaurant_id,
            date_reviewed: Some(date_reviewed),
            review: Some(review.to_owned()),
            rating,
        }
    }

    pub fn review(&self) -> &str {
        self.review.as_deref().unwrap_or("")
    }

    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }

    /// Newest first, then the larger id.
    pub fn cmp_by_date(&self, other: &Self) -> Ordering {
        other
            .date_reviewed
            .cmp(&self.date_reviewed)
            .then_with(|| other.id.cmp(&self.id))
    }

    /// Highest rating first, then newest, then id.
    pub fn cmp_by_rating(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| other.date_reviewed.cmp(&self.date_reviewed))
            .then_with(|| self.id.cmp(&other.id))
    }

    pub fn cmp_by_customer_id(&self, other: &Self) -> Ordering {
        self.customer_id
            .cmp(&other.customer_id)
            .then_with(|| self.id.cmp(&other.id))
    }

    pub fn cmp_by_restaurant_id(&self, other: &Self) -> Ordering {
        self.restaurant_id
            .cmp(&other.restaurant_id)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl RestaurantDistance {
    /// Nearest first, then restaurant name, then id.
    pub fn cmp_by_distance(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.restaurant.cmp_by_name(&other.restaurant))
    }
}
