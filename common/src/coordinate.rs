//! [`Coordinate`] definitions.

use derive_more::Display;

/// Geographic point in [WGS 84] degrees.
///
/// Formats as `latitude,longitude`, the form geocoding services accept.
///
/// [WGS 84]: https://wikipedia.org/wiki/World_Geodetic_System
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize)
)]
#[display("{latitude},{longitude}")]
pub struct Coordinate {
    /// Latitude, in `-90..=90` degrees.
    pub latitude: f64,

    /// Longitude, in `-180..=180` degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new [`Coordinate`] out of the provided degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks whether both components are finite and within their ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod spec {
    use super::Coordinate;

    #[test]
    fn displays_as_lat_lng_pair() {
        assert_eq!(
            Coordinate::new(-27.5945, -48.5477).to_string(),
            "-27.5945,-48.5477",
        );
    }

    #[test]
    fn validates_ranges() {
        assert!(Coordinate::new(-27.5945, -48.5477).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }
}
