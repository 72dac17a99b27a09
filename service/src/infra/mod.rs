//! Infrastructure layer.

pub mod directory;
pub mod geocoding;
pub mod geolocation;
#[cfg(feature = "http")]
pub mod http;

pub use self::{
    directory::{CityDirectory, ListingDirectory},
    geocoding::Geocoding,
    geolocation::Geolocation,
};
#[cfg(feature = "http")]
pub use self::{directory::Backend, geocoding::Google, geolocation::IpLookup};
