//! Numeric identifier newtypes for game entities.
//!
//! Every identifier wraps the raw numeric id used by the game's static data
//! export. A raw value of `0` is never a valid id; lookups that come back with
//! `0` are mapped to `None` at the port boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Wrap a raw id.
            #[must_use]
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Return the raw id.
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }

            /// True for the zero id, which marks an unresolved entity.
            #[must_use]
            pub const fn is_unknown(self) -> bool {
                self.0 == 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Inventory type (item) identifier.
    TypeId,
    u32
);

numeric_id!(
    /// Station, structure or other order location identifier.
    LocationId,
    u64
);

numeric_id!(
    /// Solar system identifier.
    SolarSystemId,
    u32
);

numeric_id!(
    /// Region identifier.
    RegionId,
    u32
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_unknown() {
        assert!(SolarSystemId::new(0).is_unknown());
        assert!(!RegionId::new(10_000_002).is_unknown());
    }

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&LocationId::new(60_003_760)).unwrap();
        assert_eq!(json, "60003760");

        let back: TypeId = serde_json::from_str("34").unwrap();
        assert_eq!(back, TypeId::new(34));
    }
}
