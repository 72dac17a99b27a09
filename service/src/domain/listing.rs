//! [`Listing`] definitions.

use common::{define_kind, Area, Coordinate, Money};
use derive_more::{Display, Error, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Property listed for sale or rent.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// Raw [`AddressData`] embedded into this [`Listing`], if any.
    pub address_data: Option<AddressData>,

    /// Asking price of this [`Listing`].
    pub price: Option<Money>,

    /// [`Availability`] of this [`Listing`].
    pub availability: Option<Availability>,

    /// [`Kind`] of the listed property.
    pub kind: Option<Kind>,

    /// [`Rooms`] of the listed property.
    pub rooms: Rooms,

    /// Total [`Area`] of the listed property.
    pub area: Option<Area>,
}

impl Listing {
    /// Parses the [`AddressData`] of this [`Listing`] and returns the
    /// [`Coordinate`] it points to.
    ///
    /// # Errors
    ///
    /// If the [`AddressData`] is absent or malformed.
    pub fn coordinate(&self) -> Result<Coordinate, AddressDataError> {
        self.address_data
            .as_ref()
            .ok_or(AddressDataError::Missing)?
            .parse()
            .and_then(|address| address.coordinate())
    }
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

/// Address of a [`Listing`] as a raw JSON document.
///
/// The listing backend stores it as an opaque string, so it is only parsed
/// on demand.
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub struct AddressData(String);

impl AddressData {
    /// Parses this [`AddressData`] into an [`Address`].
    ///
    /// # Errors
    ///
    /// If this [`AddressData`] is not a JSON object with numeric `latitude`
    /// and `longitude`.
    pub fn parse(&self) -> Result<Address, AddressDataError> {
        serde_json::from_str(&self.0).map_err(AddressDataError::Malformed)
    }
}

/// Parsed [`AddressData`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Address {
    /// Latitude of the listed property.
    pub latitude: f64,

    /// Longitude of the listed property.
    pub longitude: f64,

    /// Street name.
    #[serde(default)]
    pub street: Option<String>,

    /// Building number on the street.
    #[serde(default)]
    pub number: Option<String>,

    /// Neighborhood ("bairro").
    #[serde(default)]
    pub neighborhood: Option<String>,

    /// City name.
    #[serde(default)]
    pub city: Option<String>,

    /// Region (state) code.
    #[serde(default)]
    pub region: Option<String>,
}

impl Address {
    /// Returns the [`Coordinate`] of this [`Address`].
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside of the valid degree ranges.
    pub fn coordinate(&self) -> Result<Coordinate, AddressDataError> {
        let coordinate = Coordinate::new(self.latitude, self.longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(AddressDataError::OutOfRange { coordinate })
        }
    }
}

/// Error of reading a [`Coordinate`] out of [`AddressData`].
#[derive(Debug, Display, Error)]
pub enum AddressDataError {
    /// [`Listing`] carries no [`AddressData`].
    #[display("`AddressData` is missing")]
    Missing,

    /// [`AddressData`] is not a valid JSON [`Address`].
    #[display("`AddressData` is malformed: {_0}")]
    Malformed(serde_json::Error),

    /// [`Address`] points outside of the globe.
    #[display("`AddressData` coordinate `{coordinate}` is out of range")]
    OutOfRange {
        /// Offending [`Coordinate`].
        coordinate: Coordinate,
    },
}

/// Numbers of rooms in a listed property.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rooms {
    /// Number of bedrooms.
    pub bedrooms: Option<u8>,

    /// Number of bathrooms.
    pub bathrooms: Option<u8>,

    /// Number of garage spots.
    pub garages: Option<u8>,
}

define_kind! {
    #[doc = "Kind of a listed property."]
    enum Kind {
        #[doc = "An apartment in a building."]
        Apartment = 1,

        #[doc = "A detached house."]
        House = 2,

        #[doc = "A shop, an office or another commercial room."]
        Commercial = 3,

        #[doc = "A plot of land."]
        Land = 4,

        #[doc = "A rural property."]
        Farm = 5,
    }
}

impl Kind {
    /// Returns the human-readable name of this [`Kind`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Commercial => "Commercial",
            Self::Land => "Land",
            Self::Farm => "Farm",
        }
    }
}

define_kind! {
    #[doc = "Deal a [`Listing`] is available for."]
    enum Availability {
        #[doc = "Property is sold."]
        Sale = 1,

        #[doc = "Property is rented."]
        Rent = 2,
    }
}

/// Reference record describing a property [`Kind`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyType {
    /// Numeric ID of the [`Kind`].
    pub id: u8,

    /// Human-readable name of the [`Kind`].
    pub name: &'static str,
}

/// Lists all the known property types.
#[must_use]
pub fn property_types() -> Vec<PropertyType> {
    Kind::ALL
        .iter()
        .map(|k| PropertyType {
            id: k.u8(),
            name: k.name(),
        })
        .collect()
}
