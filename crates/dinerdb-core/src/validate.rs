// crates/dinerdb-core/src/validate.rs

//! Admission rules applied before any record reaches a store.
//!
//! All functions here are pure: they never touch store state and never fail
//! loudly. A `false`/`None` answer means "reject this input".

use crate::model::{Customer, Favourite, Id, Restaurant, Review};

/// Number of decimal digits a valid identifier has.
pub const ID_DIGITS: usize = 16;
/// How often a single digit may occur within an identifier.
pub const MAX_DIGIT_REPEATS: u8 = 3;

/// Checks the identifier admission rule.
///
/// An id is valid when its decimal form has exactly 16 digits, contains no
/// `0`, and no digit occurs more than three times.
///
/// # Examples
///
/// ```rust
/// use dinerdb_core::validate::is_valid_id;
///
/// assert!(is_valid_id(1234567891234567));
/// assert!(!is_valid_id(1234567890123456)); // contains a zero
/// assert!(!is_valid_id(1111222233334444)); // four of each digit
/// assert!(!is_valid_id(123456789));        // too short
/// ```
pub fn is_valid_id(id: Id) -> bool {
    let digits = id.to_string();
    if digits.len() != ID_DIGITS {
        return false;
    }

    let mut counts = [0u8; 10];
    for b in digits.bytes() {
        let d = usize::from(b - b'0');
        if d == 0 {
            return false;
        }
        counts[d] += 1;
        if counts[d] > MAX_DIGIT_REPEATS {
            return false;
        }
    }
    true
}

/// Recovers a restaurant's true id from its three transmitted copies.
///
/// The true id is the copy that agrees with at least one other copy. Anything
/// other than exactly three copies, three disagreeing copies, or an agreed
/// copy that is not a number yields `None`.
///
/// ```rust
/// use dinerdb_core::validate::extract_true_id;
///
/// assert_eq!(extract_true_id(&["5", "5", "7"]), Some(5));
/// assert_eq!(extract_true_id(&["5", "7", "9"]), None);
/// assert_eq!(extract_true_id(&["5", "5"]), None);
/// ```
pub fn extract_true_id<S: AsRef<str>>(repeated: &[S]) -> Option<Id> {
    let [a, b, c] = repeated else {
        return None;
    };
    let (a, b, c) = (a.as_ref(), b.as_ref(), c.as_ref());

    let agreed = if a == b || a == c {
        a
    } else if b == c {
        b
    } else {
        return None;
    };
    agreed.trim().parse().ok()
}

/// Structural and semantic admission check for one entity type.
pub trait Validate {
    fn is_valid(&self) -> bool;
}

impl Validate for Customer {
    fn is_valid(&self) -> bool {
        self.first_name.is_some()
            && self.last_name.is_some()
            && self.date_joined.is_some()
            && self.latitude != 0.0
            && self.longitude != 0.0
            && is_valid_id(self.id)
    }
}

impl Validate for Restaurant {
    fn is_valid(&self) -> bool {
        let fields_present = self.owner_first_name.is_some()
            && self.owner_last_name.is_some()
            && self.cuisine.is_some()
            && self.establishment_type.is_some()
            && self.price_range.is_some()
            && self.date_established.is_some()
            && self.last_inspected_date.is_some()
            && self.latitude != 0.0;
        if !fields_present {
            return false;
        }

        // The assigned id must be the one the repeated copies vote for.
        match (self.id, extract_true_id(&self.repeated_id)) {
            (Some(id), Some(true_id)) if id == true_id && is_valid_id(id) => {}
            _ => return false,
        }

        let rating = self.customer_rating;
        (0..=5).contains(&self.food_inspection_rating)
            && (0..=3).contains(&self.warwick_stars)
            && (rating == 0.0 || (1.0..=5.0).contains(&rating))
    }
}

impl Validate for Favourite {
    fn is_valid(&self) -> bool {
        self.date_favourited.is_some()
            && is_valid_id(self.id)
            && is_valid_id(self.customer_id)
            && is_valid_id(self.restaurant_id)
    }
}

impl Validate for Review {
    fn is_valid(&self) -> bool {
        self.date_reviewed.is_some()
            && self.review.is_some()
            && (1..=5).contains(&self.rating)
            && is_valid_id(self.id)
            && is_valid_id(self.customer_id)
            && is_valid_id(self.restaurant_id)
    }
}
