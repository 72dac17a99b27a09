//! Search [`Filters`] definitions.
//!
//! [`Filters`] only capture what the user asked for. No query applies them
//! yet.

use common::{define_kind, Area, Money};

use super::{city, listing};

/// Filters of a property search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    /// Desired [`listing::Kind`].
    pub kind: Option<listing::Kind>,

    /// Desired [`listing::Availability`].
    pub availability: Option<listing::Availability>,

    /// Desired number of bedrooms.
    pub bedrooms: Option<Count>,

    /// Desired number of garage spots.
    pub garages: Option<Count>,

    /// [`city::Id`] to search in.
    pub city: Option<city::Id>,

    /// Neighborhood to search in.
    pub neighborhood: Option<String>,

    /// Accepted price [`Range`].
    pub price: Range<Money>,

    /// Accepted [`Area`] [`Range`].
    pub area: Range<Area>,
}

impl Filters {
    /// Applies the provided [`Change`] to these [`Filters`].
    #[must_use]
    pub fn apply(self, change: Change) -> Self {
        match change {
            Change::Kind(kind) => Self { kind, ..self },
            Change::Availability(availability) => Self {
                availability,
                ..self
            },
            Change::Bedrooms(bedrooms) => Self { bedrooms, ..self },
            Change::Garages(garages) => Self { garages, ..self },
            Change::City(city) => Self { city, ..self },
            Change::Neighborhood(neighborhood) => Self {
                neighborhood: neighborhood
                    .map(|n| n.trim().to_owned())
                    .filter(|n| !n.is_empty()),
                ..self
            },
            Change::PriceFrom(from) => Self {
                price: Range { from, ..self.price },
                ..self
            },
            Change::PriceTo(to) => Self {
                price: Range { to, ..self.price },
                ..self
            },
            Change::AreaFrom(from) => Self {
                area: Range { from, ..self.area },
                ..self
            },
            Change::AreaTo(to) => Self {
                area: Range { to, ..self.area },
                ..self
            },
        }
    }

    /// Indicates whether no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Change of a single [`Filters`] field.
///
/// [`None`] clears the field.
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// Sets [`Filters::kind`].
    Kind(Option<listing::Kind>),

    /// Sets [`Filters::availability`].
    Availability(Option<listing::Availability>),

    /// Sets [`Filters::bedrooms`].
    Bedrooms(Option<Count>),

    /// Sets [`Filters::garages`].
    Garages(Option<Count>),

    /// Sets [`Filters::city`].
    City(Option<city::Id>),

    /// Sets [`Filters::neighborhood`].
    Neighborhood(Option<String>),

    /// Sets the lower bound of [`Filters::price`].
    PriceFrom(Option<Money>),

    /// Sets the upper bound of [`Filters::price`].
    PriceTo(Option<Money>),

    /// Sets the lower bound of [`Filters::area`].
    AreaFrom(Option<Area>),

    /// Sets the upper bound of [`Filters::area`].
    AreaTo(Option<Area>),
}

/// Optionally bounded range of values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Range<T> {
    /// Inclusive lower bound.
    pub from: Option<T>,

    /// Inclusive upper bound.
    pub to: Option<T>,
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
        }
    }
}

define_kind! {
    #[doc = "Bucket of a room count in [`Filters`]."]
    enum Count {
        #[doc = "Exactly one."]
        One = 1,

        #[doc = "Exactly two."]
        Two = 2,

        #[doc = "Three or more."]
        ThreeOrMore = 3,
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::{city, listing};

    use super::{Change, Count, Filters};

    #[test]
    fn changes_single_field() {
        let filters = Filters::default()
            .apply(Change::Availability(Some(listing::Availability::Rent)))
            .apply(Change::Bedrooms(Some(Count::Two)))
            .apply(Change::City(Some(city::Id::from(42))));

        assert_eq!(filters.availability, Some(listing::Availability::Rent));
        assert_eq!(filters.bedrooms, Some(Count::Two));
        assert_eq!(filters.city, Some(city::Id::from(42)));
        assert_eq!(filters.garages, None);
        assert_eq!(filters.kind, None);
    }

    #[test]
    fn clears_field() {
        let filters = Filters::default()
            .apply(Change::Garages(Some(Count::ThreeOrMore)))
            .apply(Change::Garages(None));

        assert!(filters.is_empty());
    }

    #[test]
    fn keeps_other_range_bound() {
        let from = Money::brl("100000".parse().unwrap());
        let to = Money::brl("250000".parse().unwrap());

        let filters = Filters::default()
            .apply(Change::PriceFrom(Some(from)))
            .apply(Change::PriceTo(Some(to)));

        assert_eq!(filters.price.from, Some(from));
        assert_eq!(filters.price.to, Some(to));
    }

    #[test]
    fn blank_neighborhood_is_cleared() {
        let filters = Filters::default()
            .apply(Change::Neighborhood(Some(" Centro ".into())));
        assert_eq!(filters.neighborhood.as_deref(), Some("Centro"));

        let filters = filters.apply(Change::Neighborhood(Some("  ".into())));
        assert!(filters.is_empty());
    }
}
