//! [`Geocoding`]-related implementations.

#[cfg(feature = "http")]
mod google;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
use crate::infra::http;

#[cfg(feature = "http")]
pub use self::google::{Config, Google};

/// Reverse geocoding of a [`Coordinate`] into a [`geocoding::Response`].
///
/// [`Coordinate`]: common::Coordinate
/// [`geocoding::Response`]: crate::domain::geocoding::Response
pub use common::Handler as Geocoding;

/// [`Geocoding`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Geocoding service is unreachable or replied with garbage.
    #[cfg(feature = "http")]
    #[display("geocoding transport failed: {_0}")]
    Transport(http::Error),
}
