// crates/dinerdb-core/src/model/kinds.rs
use crate::error::DinerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a plain enum with `as_str`, `Display` and a lenient `FromStr`.
///
/// Parsing ignores case as well as `_`, `-` and spaces, so `Fast_Food`,
/// `fast-food` and `FastFood` all resolve to the same variant.
macro_rules! named_kind {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DinerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = squash(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|k| squash(k.as_str()) == wanted)
                    .ok_or_else(|| {
                        DinerError::InvalidData(format!(
                            "unknown {}: '{}'",
                            stringify!($name),
                            s
                        ))
                    })
            }
        }
    };
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

named_kind! {
    /// Cuisine served by a restaurant.
    Cuisine {
        American => "American",
        Arabic => "Arabic",
        British => "British",
        Chinese => "Chinese",
        Dessert => "Dessert",
        French => "French",
        Greek => "Greek",
        Indian => "Indian",
        Italian => "Italian",
        Japanese => "Japanese",
        Korean => "Korean",
        Mexican => "Mexican",
        Spanish => "Spanish",
        Thai => "Thai",
        Turkish => "Turkish",
        Vegan => "Vegan",
        Vietnamese => "Vietnamese",
    }
}

named_kind! {
    /// Kind of establishment.
    EstablishmentType {
        Bakery => "Bakery",
        Bar => "Bar",
        Cafe => "Cafe",
        Deli => "Deli",
        FastFood => "Fast_Food",
        FoodTruck => "Food_Truck",
        Pub => "Pub",
        Restaurant => "Restaurant",
        Takeaway => "Takeaway",
    }
}

named_kind! {
    PriceRange {
        Cheap => "Cheap",
        Moderate => "Moderate",
        Expensive => "Expensive",
        VeryExpensive => "Very_Expensive",
    }
}
