//! [`Area`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

/// Non-negative floor area in square meters.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`] by checking the provided value is not negative.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO).then_some(Self(val))
    }

    /// Returns the number of square meters in this [`Area`].
    #[must_use]
    pub fn square_meters(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m²", self.0.normalize())
    }
}

impl FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix("m²").map_or(s, str::trim_end);
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid area value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Area;

    impl Serialize for Area {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            Serialize::serialize(&self.0, s)
        }
    }

    impl<'de> Deserialize<'de> for Area {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            Self::new(<Decimal as Deserialize>::deserialize(d)?)
                .ok_or_else(|| de::Error::custom("negative `Area`"))
        }
    }
}
