//! Reverse geocoding definitions.

use std::collections::HashSet;

use common::Coordinate;

/// Address type tag of a locality, i.e. a city-level area.
pub const LOCALITY: &str = "locality";

/// Address type tag of a political entity.
pub const POLITICAL: &str = "political";

/// Response of a reverse geocoding lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    /// [`Status`] of this [`Response`].
    pub status: Status,

    /// [`AddressCandidate`]s ranked from the most to the least specific.
    pub candidates: Vec<AddressCandidate>,
}

impl Response {
    /// Returns the first [`AddressCandidate`] being a city-level
    /// administrative area, if any.
    #[must_use]
    pub fn locality(&self) -> Option<&AddressCandidate> {
        self.candidates.iter().find(|c| c.is_locality())
    }
}

/// Status of a geocoding [`Response`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// Lookup succeeded and [`Response::candidates`] are meaningful.
    Ok,

    /// Any other status reported by the geocoding service, e.g.
    /// `ZERO_RESULTS` or `REQUEST_DENIED`.
    Other(String),
}

impl Status {
    /// Parses a raw status string as reported by the geocoding service.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "OK" {
            Self::Ok
        } else {
            Self::Other(raw.to_owned())
        }
    }

    /// Indicates whether this is the [`Status::Ok`].
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Single address a [`Coordinate`] may belong to.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressCandidate {
    /// Human-readable address, e.g. `Florianópolis, SC, Brazil`.
    pub formatted_address: String,

    /// Type tags of this address, e.g. `locality` and `political`.
    pub types: HashSet<String>,

    /// [`Coordinate`] of this address.
    pub coordinate: Coordinate,
}

impl AddressCandidate {
    /// Checks whether this [`AddressCandidate`] is tagged as both a
    /// [`LOCALITY`] and a [`POLITICAL`] entity.
    #[must_use]
    pub fn is_locality(&self) -> bool {
        self.types.contains(LOCALITY) && self.types.contains(POLITICAL)
    }
}
