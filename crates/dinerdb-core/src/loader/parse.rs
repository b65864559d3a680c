// crates/dinerdb-core/src/loader/parse.rs

//! Field conversion for each entity's row layout.
//!
//! Empty fields become absent values so validation can reject the record
//! later; text that is present but unreadable makes the row malformed.

use super::Row;
use crate::error::Result;
use crate::model::{Customer, Favourite, Id, Restaurant, Review, DATE_FORMAT};
use chrono::NaiveDateTime;
use std::str::FromStr;

const CUSTOMER_FIELDS: usize = 6;
const RESTAURANT_FIELDS: usize = 19;
const FAVOURITE_FIELDS: usize = 4;
/// id, customer, restaurant, date, body, rating
const REVIEW_MIN_FIELDS: usize = 6;

struct Fields<'a> {
    row: &'a Row,
}

impl<'a> Fields<'a> {
    fn new(row: &'a Row) -> Self {
        Fields { row }
    }

    fn raw(&self, i: usize) -> &'a str {
        self.row.fields.get(i).map_or("", |s| s.trim())
    }

    fn text(&self, i: usize) -> Option<String> {
        let s = self.raw(i);
        (!s.is_empty()).then(|| s.to_owned())
    }

    fn id(&self, i: usize) -> Result<Id> {
        let s = self.raw(i);
        s.parse()
            .map_err(|_| self.row.malformed(format!("field {}: bad id '{}'", i + 1, s)))
    }

    /// Empty reads as the type's default.
    fn number<T: FromStr + Default>(&self, i: usize) -> Result<T> {
        let s = self.raw(i);
        if s.is_empty() {
            return Ok(T::default());
        }
        s.parse()
            .map_err(|_| self.row.malformed(format!("field {}: bad number '{}'", i + 1, s)))
    }

    fn date(&self, i: usize) -> Result<Option<NaiveDateTime>> {
        let s = self.raw(i);
        if s.is_empty() {
            return Ok(None);
        }
        NaiveDateTime::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|e| self.row.malformed(format!("field {}: bad date '{}': {}", i + 1, s, e)))
    }

    fn flag(&self, i: usize) -> Result<bool> {
        match self.raw(i).to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" | "" => Ok(false),
            other => Err(self
                .row
                .malformed(format!("field {}: bad flag '{}'", i + 1, other))),
        }
    }

    fn kind<K: FromStr<Err = crate::DinerError>>(&self, i: usize) -> Result<Option<K>> {
        let s = self.raw(i);
        if s.is_empty() {
            return Ok(None);
        }
        s.parse()
            .map(Some)
            .map_err(|e| self.row.malformed(format!("field {}: {}", i + 1, e)))
    }
}

fn expect_fields(row: &Row, allowed: &[usize]) -> Result<()> {
    if allowed.contains(&row.fields.len()) {
        Ok(())
    } else {
        Err(row.malformed(format!(
            "expected {:?} fields, found {}",
            allowed,
            row.fields.len()
        )))
    }
}

/// `id,first,last,joined,lat,lon`
pub fn parse_customer(row: &Row) -> Result<Customer> {
    expect_fields(row, &[CUSTOMER_FIELDS])?;
    let f = Fields::new(row);
    Ok(Customer {
        id: f.id(0)?,
        first_name: f.text(1),
        last_name: f.text(2),
        date_joined: f.date(3)?,
        latitude: f.number(4)?,
        longitude: f.number(5)?,
    })
}

/// `repeatedId,name,ownerFirst,ownerLast,cuisine,establishment,price,
/// established,lat,lon,vegan,tableService,alcohol,wifi,disabledAccess,
/// onlineOrdering,lastInspected,foodInspection,warwickStars[,customerRating]`
///
/// The id is left unassigned; the store derives it from the copies.
pub fn parse_restaurant(row: &Row) -> Result<Restaurant> {
    expect_fields(row, &[RESTAURANT_FIELDS, RESTAURANT_FIELDS + 1])?;
    let f = Fields::new(row);
    Ok(Restaurant {
        id: None,
        repeated_id: Restaurant::split_repeated_id(f.raw(0)),
        name: f.text(1),
        owner_first_name: f.text(2),
        owner_last_name: f.text(3),
        cuisine: f.kind(4)?,
        establishment_type: f.kind(5)?,
        price_range: f.kind(6)?,
        date_established: f.date(7)?,
        latitude: f.number(8)?,
        longitude: f.number(9)?,
        vegan_options: f.flag(10)?,
        has_table_service: f.flag(11)?,
        has_alcohol_licence: f.flag(12)?,
        has_wifi: f.flag(13)?,
        has_disabled_access: f.flag(14)?,
        has_online_ordering: f.flag(15)?,
        last_inspected_date: f.date(16)?,
        food_inspection_rating: f.number(17)?,
        warwick_stars: f.number(18)?,
        customer_rating: f.number(19)?,
    })
}

/// `id,customer,restaurant,date`
pub fn parse_favourite(row: &Row) -> Result<Favourite> {
    expect_fields(row, &[FAVOURITE_FIELDS])?;
    let f = Fields::new(row);
    Ok(Favourite {
        id: f.id(0)?,
        customer_id: f.id(1)?,
        restaurant_id: f.id(2)?,
        date_favourited: f.date(3)?,
    })
}

/// `id,customer,restaurant,date,body...,rating`
///
/// A body containing the delimiter spans several fields; they are joined
/// back with the delimiter that split them.
pub fn parse_review(row: &Row, delimiter: char) -> Result<Review> {
    let n = row.fields.len();
    if n < REVIEW_MIN_FIELDS {
        return Err(row.malformed(format!(
            "expected at least {} fields, found {}",
            REVIEW_MIN_FIELDS, n
        )));
    }
    let f = Fields::new(row);
    let body = row.fields[4..n - 1].join(&delimiter.to_string()).trim().to_owned();
    Ok(Review {
        id: f.id(0)?,
        customer_id: f.id(1)?,
        restaurant_id: f.id(2)?,
        date_reviewed: f.date(3)?,
        review: (!body.is_empty()).then_some(body),
        rating: f.number(n - 1)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cuisine, PriceRange};
    use crate::DinerError;

    fn row(text: &str) -> Row {
        Row {
            line: 2,
            fields: text.split(',').map(str::to_owned).collect(),
        }
    }

    #[test]
    fn customer_row() {
        let c =
            parse_customer(&row("1234567891234567,Ann,Lee,2020-02-03 10:11:12,52.4,-1.5")).unwrap();
        assert_eq!(c.id, 1234567891234567);
        assert_eq!(c.last_name(), "Lee");
        assert_eq!(c.date_joined.map(|d| d.to_string()).as_deref(), Some("2020-02-03 10:11:12"));
        assert_eq!(c.longitude, -1.5);
    }

    #[test]
    fn empty_fields_become_absent() {
        let c = parse_customer(&row("1234567891234567,,Lee,,,")).unwrap();
        assert!(c.first_name.is_none());
        assert!(c.date_joined.is_none());
        assert_eq!(c.latitude, 0.0);
    }

    #[test]
    fn garbage_is_malformed() {
        let err = parse_customer(&row("abc,Ann,Lee,2020-02-03 10:11:12,52.4,-1.5")).err();
        assert!(matches!(err, Some(DinerError::MalformedRow { line: 2, .. })));
        assert!(parse_customer(&row("1,2,3")).is_err());
        assert!(parse_favourite(&row("1,2,3,yesterday")).is_err());
    }

    #[test]
    fn restaurant_row() {
        let r = parse_restaurant(&row(
            "123123124,Pho Real,Kim,Ng,vietnamese,Cafe,very_expensive,2012-01-01 00:00:00,\
             52.4,-1.5,true,false,TRUE,0,1,false,2021-06-01 09:00:00,4,2,3.5",
        ))
        .unwrap();
        assert_eq!(r.repeated_id, ["123", "123", "124"]);
        assert_eq!(r.id, None);
        assert_eq!(r.cuisine, Some(Cuisine::Vietnamese));
        assert_eq!(r.price_range, Some(PriceRange::VeryExpensive));
        assert!(r.vegan_options && r.has_alcohol_licence && r.has_disabled_access);
        assert!(!r.has_wifi);
        assert_eq!(r.warwick_stars, 2);
        assert_eq!(r.customer_rating, 3.5);
    }

    #[test]
    fn restaurant_rating_column_is_optional() {
        let r = parse_restaurant(&row(
            "111,Pub,Kim,Ng,British,Pub,Cheap,2012-01-01 00:00:00,\
             52.4,-1.5,no,no,yes,no,no,no,2021-06-01 09:00:00,4,0",
        ))
        .unwrap();
        assert_eq!(r.customer_rating, 0.0);
        assert_eq!(r.repeated_id, ["1", "1", "1"]);
    }

    #[test]
    fn review_body_keeps_commas() {
        let r = parse_review(
            &row("1234567891234567,1234567891234568,1234567891234569,2021-01-01 12:00:00,good, cheap, fast,4"),
            ',',
        )
        .unwrap();
        assert_eq!(r.review(), "good, cheap, fast");
        assert_eq!(r.rating, 4);
    }
}
