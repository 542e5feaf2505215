//! Enumerated values accepted by the Etsy API.
//!
//! Every enum here serializes to its exact wire code, which is also what
//! [`as_str`](WhoMade::as_str) and `Display` return:
//!
//! ```rust
//! use etsy_api::enums::{WhenMade, WhoMade};
//! use serde_json::Value;
//!
//! assert_eq!(WhoMade::IDid.as_str(), "i_did");
//! assert_eq!(Value::from(WhenMade::Twenty20s), Value::from("2020_2023"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$( Self::$variant, )+];

            /// Returns the wire code of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok(Self::$variant), )+
                    other => Err(UnknownCode {
                        kind: stringify!($name),
                        code: other.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Self::String(value.as_str().to_string())
            }
        }
    };
}

/// A string that is not the wire code of any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{code}' is not a valid {kind}")]
pub struct UnknownCode {
    /// The enum that was being parsed.
    pub kind: &'static str,
    /// The rejected code.
    pub code: String,
}

wire_enum! {
    /// Who made the item being listed.
    pub enum WhoMade {
        /// Made by the seller.
        IDid => "i_did",
        /// Made by another person.
        SomeoneElse => "someone_else",
        /// Made by a collective the seller belongs to.
        Collective => "collective",
    }
}

wire_enum! {
    /// When the item being listed was made.
    pub enum WhenMade {
        MadeToOrder => "made_to_order",
        Twenty20s => "2020_2023",
        Twenty10s => "2010_2019",
        From2003To2009 => "2003_2009",
        Before2003 => "before_2003",
        From2000To2002 => "2000_2002",
        Nineteen90s => "1990s",
        Nineteen80s => "1980s",
        Nineteen70s => "1970s",
        Nineteen60s => "1960s",
        Nineteen50s => "1950s",
        Nineteen40s => "1940s",
        Nineteen30s => "1930s",
        Nineteen20s => "1920s",
        Nineteen10s => "1910s",
        Nineteen00s => "1900s",
        Eighteen00s => "1800s",
        Seventeen00s => "1700s",
        Before1700 => "before_1700",
    }
}

wire_enum! {
    /// Unit of a listing's `item_weight`.
    pub enum ItemWeightUnit {
        Oz => "oz",
        Lb => "lb",
        G => "g",
        Kg => "kg",
    }
}

wire_enum! {
    /// Unit of a listing's length, width and height.
    pub enum ItemDimensionsUnit {
        In => "in",
        Ft => "ft",
        Mm => "mm",
        Yd => "yd",
        Inches => "inches",
    }
}

wire_enum! {
    /// The state a listing can be moved to by an update.
    pub enum ListingRequestState {
        Active => "active",
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Whether a listing is shipped, downloaded, or both.
    pub enum ListingType {
        Physical => "physical",
        Download => "download",
        Both => "both",
    }
}

wire_enum! {
    /// Listing state filter for shop listing queries.
    pub enum ListingState {
        Active => "active",
        Inactive => "inactive",
        SoldOut => "sold_out",
        Draft => "draft",
        Expired => "expired",
    }
}

wire_enum! {
    /// Sort key for listing and receipt queries.
    pub enum SortOn {
        Created => "created",
        Price => "price",
        Updated => "updated",
        Score => "score",
    }
}

wire_enum! {
    /// Sort direction.
    pub enum SortOrder {
        Asc => "asc",
        Ascending => "ascending",
        Desc => "desc",
        Descending => "descending",
        Up => "up",
        Down => "down",
    }
}

wire_enum! {
    /// Associations that can be embedded in listing responses.
    pub enum Includes {
        Shipping => "Shipping",
        Images => "Images",
        Shop => "Shop",
        User => "User",
        Translations => "Translations",
        Inventory => "Inventory",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_who_made_codes() {
        assert_eq!(WhoMade::IDid.as_str(), "i_did");
        assert_eq!(WhoMade::SomeoneElse.to_string(), "someone_else");
        assert_eq!(Value::from(WhoMade::Collective), json!("collective"));
    }

    #[test]
    fn test_when_made_numeric_codes() {
        assert_eq!(WhenMade::Twenty20s.as_str(), "2020_2023");
        assert_eq!(WhenMade::Nineteen00s.as_str(), "1900s");
        assert_eq!(WhenMade::Before1700.as_str(), "before_1700");
        assert_eq!(WhenMade::ALL.len(), 19);
    }

    #[test]
    fn test_includes_codes_are_capitalized() {
        let codes: Vec<_> = Includes::ALL.iter().map(|i| i.as_str()).collect();
        assert_eq!(
            codes,
            ["Shipping", "Images", "Shop", "User", "Translations", "Inventory"]
        );
    }

    #[test]
    fn test_serialize_as_code() {
        assert_eq!(
            serde_json::to_value(ListingState::SoldOut).unwrap(),
            json!("sold_out")
        );
        assert_eq!(
            serde_json::to_value(vec![SortOrder::Desc, SortOrder::Up]).unwrap(),
            json!(["desc", "up"])
        );
    }

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for unit in ItemDimensionsUnit::ALL {
            assert_eq!(unit.as_str().parse::<ItemDimensionsUnit>().unwrap(), *unit);
        }
    }

    #[test]
    fn test_serde_codes_match_as_str() {
        for when in WhenMade::ALL {
            assert_eq!(serde_json::to_value(when).unwrap(), json!(when.as_str()));
            let parsed: WhenMade = serde_json::from_value(json!(when.as_str())).unwrap();
            assert_eq!(parsed, *when);
        }
        for include in Includes::ALL {
            assert_eq!(serde_json::to_value(include).unwrap(), json!(include.as_str()));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let error = "stone".parse::<ItemWeightUnit>().unwrap_err();
        assert_eq!(error.kind, "ItemWeightUnit");
        assert_eq!(error.to_string(), "'stone' is not a valid ItemWeightUnit");

        let result: Result<ListingType, _> = serde_json::from_value(json!("digital"));
        assert!(result.is_err());
    }
}
