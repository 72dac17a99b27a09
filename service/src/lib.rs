//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod infra;
pub mod query;
pub mod screen;

use common::Coordinate;
use smart_default::SmartDefault;

#[cfg(doc)]
use infra::{CityDirectory, Geocoding, Geolocation, ListingDirectory};

pub use self::{query::Query, screen::Screen};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Center the search screen falls back to until the device's location is
    /// resolved.
    #[default(Coordinate::new(-27.558_532_5, -48.497_110_3))]
    pub default_center: Coordinate,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Loc, Geo, Dir> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Geolocation`] of this [`Service`].
    geolocation: Loc,

    /// [`Geocoding`] of this [`Service`].
    geocoding: Geo,

    /// [`CityDirectory`] and [`ListingDirectory`] of this [`Service`].
    directory: Dir,
}

impl<Loc, Geo, Dir> Service<Loc, Geo, Dir> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub const fn new(
        config: Config,
        geolocation: Loc,
        geocoding: Geo,
        directory: Dir,
    ) -> Self {
        Self {
            config,
            geolocation,
            geocoding,
            directory,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Geolocation`] of this [`Service`].
    #[must_use]
    pub const fn geolocation(&self) -> &Loc {
        &self.geolocation
    }

    /// Returns [`Geocoding`] of this [`Service`].
    #[must_use]
    pub const fn geocoding(&self) -> &Geo {
        &self.geocoding
    }

    /// Returns [`CityDirectory`] and [`ListingDirectory`] of this
    /// [`Service`].
    #[must_use]
    pub const fn directory(&self) -> &Dir {
        &self.directory
    }
}
