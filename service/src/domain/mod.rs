//! Domain definitions.

pub mod city;
pub mod filter;
pub mod geocoding;
pub mod listing;
pub mod marker;

pub use self::{
    city::City, filter::Filters, geocoding::AddressCandidate,
    listing::Listing, marker::Marker,
};
