//! Strongly typed identifier wrappers.
//!
//! Vehicles and collection points are owned by an external store that hands
//! out string keys, so the wrappers hold a `String` rather than an index.
//! Both are `Ord + Hash` so they can key `BTreeMap`s and `HashMap`s.

use std::fmt;

/// Generate a typed ID wrapper around a `String`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

typed_id! {
    /// Store key of a collection vehicle (truck).
    pub struct VehicleId;
}

typed_id! {
    /// Store key of a collection point (bin).
    pub struct CollectionPointId;
}
