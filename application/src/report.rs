//! [`Report`] of the search screen printed by the application.

use common::{Coordinate, Money};
use serde::Serialize;
use service::{
    domain::{city, listing, City, Listing, Marker},
    screen::{Center, State},
};

/// Printable snapshot of the search screen [`State`].
#[derive(Debug, Serialize)]
pub struct Report {
    /// Map center.
    pub center: Coordinate,

    /// Whether the [`Report::center`] is the resolved one.
    pub resolved: bool,

    /// Search mode, `MAP` or `GRID`.
    pub mode: String,

    /// Whether the search form is expanded.
    pub search_form_visible: bool,

    /// Whether the listing details are expanded.
    pub details_visible: bool,

    /// Label of the picked city, if any.
    pub selected_city: Option<String>,

    /// Options of the city autocomplete.
    pub city_options: Vec<CityOption>,

    /// Options of the city filter of the search form.
    pub city_choices: Vec<CityOption>,

    /// Property types offered by the search form.
    pub property_types: Vec<listing::PropertyType>,

    /// Map pins.
    pub markers: Vec<Marker>,

    /// Found listings.
    pub listings: Vec<ListingCard>,
}

impl From<&State> for Report {
    fn from(state: &State) -> Self {
        Self {
            center: state.center(),
            resolved: matches!(state.results.center, Center::Resolved(_)),
            mode: state.mode.to_string(),
            search_form_visible: state.search_form_visible,
            details_visible: state.details_visible,
            selected_city: state.selected_city.as_ref().map(City::to_string),
            city_options: state.city_options.iter().map(Into::into).collect(),
            city_choices: state.city_choices.iter().map(Into::into).collect(),
            property_types: state.property_types.clone(),
            markers: state.results.markers.clone(),
            listings: state.results.listings.iter().map(Into::into).collect(),
        }
    }
}

/// Single option of the city autocomplete.
#[derive(Debug, Serialize)]
pub struct CityOption {
    /// ID of the city.
    pub id: city::Id,

    /// Label shown to the user, e.g. `Florianópolis, Santa Catarina`.
    pub label: String,
}

impl From<&City> for CityOption {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            label: city.to_string(),
        }
    }
}

/// Listing as shown in the results grid.
#[derive(Debug, Serialize)]
pub struct ListingCard {
    /// ID of the listing.
    pub id: listing::Id,

    /// Asking price, e.g. `1500000BRL`.
    pub price: Option<Money>,

    /// `SALE` or `RENT`.
    pub availability: Option<String>,

    /// Human-readable property type.
    #[serde(rename = "type")]
    pub kind: Option<&'static str>,

    /// Number of bedrooms.
    pub bedrooms: Option<u8>,

    /// Number of bathrooms.
    pub bathrooms: Option<u8>,

    /// Number of garage spots.
    pub garages: Option<u8>,

    /// Total area, e.g. `60 m²`.
    pub area: Option<String>,

    /// Neighborhood the property is in, if known.
    pub neighborhood: Option<String>,
}

impl From<&Listing> for ListingCard {
    fn from(l: &Listing) -> Self {
        Self {
            id: l.id,
            price: l.price,
            availability: l.availability.map(|a| a.to_string()),
            kind: l.kind.map(listing::Kind::name),
            bedrooms: l.rooms.bedrooms,
            bathrooms: l.rooms.bathrooms,
            garages: l.rooms.garages,
            area: l.area.as_ref().map(ToString::to_string),
            neighborhood: l
                .address_data
                .as_ref()
                .and_then(|a| a.parse().ok())
                .and_then(|a| a.neighborhood),
        }
    }
}
