//! [`Marker`] definitions.

use std::collections::HashSet;

use common::Coordinate;
use derive_more::{Display, Error as StdError};
use serde::Serialize;

use super::{listing, Listing};

/// Map pin of a single [`Listing`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Marker {
    /// ID of the [`Listing`] this [`Marker`] pins.
    pub id: listing::Id,

    /// Position of this [`Marker`] on the map.
    pub position: Coordinate,
}

impl Marker {
    /// Builds a [`Marker`] out of the provided [`Listing`].
    ///
    /// # Errors
    ///
    /// If the [`Listing`] has no readable [`listing::AddressData`].
    pub fn of(listing: &Listing) -> Result<Self, Error> {
        let position =
            listing.coordinate().map_err(|source| Error::Address {
                listing: listing.id,
                source,
            })?;
        Ok(Self {
            id: listing.id,
            position,
        })
    }

    /// Builds one [`Marker`] per [`Listing`], preserving their order.
    ///
    /// A single unreadable or repeated [`Listing`] fails the whole set, so
    /// every [`Marker`] pins exactly one of the listings it is shown along
    /// with.
    ///
    /// # Errors
    ///
    /// With the first [`Listing`] having no readable
    /// [`listing::AddressData`], or the first one whose [`listing::Id`] is
    /// already pinned.
    pub fn all_of<'a>(
        listings: impl IntoIterator<Item = &'a Listing>,
    ) -> Result<Vec<Self>, Error> {
        let mut pinned = HashSet::new();
        listings
            .into_iter()
            .map(|l| {
                if !pinned.insert(l.id) {
                    return Err(Error::Duplicate { listing: l.id });
                }
                Self::of(l)
            })
            .collect()
    }
}

/// Error of building a [`Marker`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// [`Listing`] has no readable [`listing::AddressData`].
    #[display("cannot pin `Listing(id: {listing})`: {source}")]
    Address {
        /// ID of the [`Listing`] failed to be pinned.
        listing: listing::Id,

        /// Reason of the failure.
        source: listing::AddressDataError,
    },

    /// [`Listing`] with the same [`listing::Id`] is already pinned.
    #[display("`Listing(id: {listing})` is pinned twice")]
    Duplicate {
        /// ID of the repeated [`Listing`].
        listing: listing::Id,
    },
}

impl Error {
    /// Returns the [`listing::Id`] of the [`Listing`] failed to be pinned.
    #[must_use]
    pub const fn listing(&self) -> listing::Id {
        match self {
            Self::Address { listing, .. } | Self::Duplicate { listing } => {
                *listing
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use std::collections::HashSet;

    use common::Coordinate;

    use crate::domain::listing::{self, AddressData, Listing, Rooms};

    use super::{Error, Marker};

    fn listing(id: u64, address_data: Option<&str>) -> Listing {
        Listing {
            id: listing::Id::from(id),
            address_data: address_data.map(|s| AddressData::from(s.to_owned())),
            price: None,
            availability: None,
            kind: None,
            rooms: Rooms::default(),
            area: None,
        }
    }

    fn located(id: u64, lat: f64, lng: f64) -> Listing {
        listing(
            id,
            Some(&format!(r#"{{"latitude": {lat}, "longitude": {lng}}}"#)),
        )
    }

    #[test]
    fn pins_every_listing() {
        for n in [0_u32, 1, 2, 17] {
            let listings = (0..n)
                .map(|i| located(u64::from(i), -27.0 - f64::from(i) / 100.0, -48.5))
                .collect::<Vec<_>>();

            let markers = Marker::all_of(&listings).unwrap();

            assert_eq!(markers.len(), listings.len());
            assert_eq!(
                markers.iter().map(|m| m.id).collect::<HashSet<_>>().len(),
                listings.len(),
            );
            for (m, l) in markers.iter().zip(&listings) {
                assert_eq!(m.id, l.id);
                assert_eq!(m.position, l.coordinate().unwrap());
            }
        }
    }

    #[test]
    fn one_bad_listing_fails_all() {
        let listings = [
            located(1, -27.6, -48.55),
            listing(2, Some("{broken")),
            located(3, -27.59, -48.54),
        ];

        let err = Marker::all_of(&listings).unwrap_err();

        assert!(matches!(err, Error::Address { .. }));
        assert_eq!(err.listing(), listing::Id::from(2));
    }

    #[test]
    fn repeated_listing_fails_all() {
        let listings = [
            located(7, -27.6, -48.55),
            located(8, -27.59, -48.54),
            located(7, -27.6, -48.55),
        ];

        let err = Marker::all_of(&listings).unwrap_err();

        assert!(matches!(err, Error::Duplicate { .. }));
        assert_eq!(err.listing(), listing::Id::from(7));
    }

    #[test]
    fn keeps_position() {
        let marker = Marker::of(&located(42, -27.6, -48.55)).unwrap();

        assert_eq!(marker.position, Coordinate::new(-27.6, -48.55));
    }
}
