//! [Google Geocoding API] implementation of [`Geocoding`].
//!
//! [Google Geocoding API]: https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding

use std::collections::HashSet;

use common::{
    operations::{By, Select},
    Coordinate,
};
use derive_more::Debug;
use secrecy::{ExposeSecret as _, SecretString};
use serde::Deserialize;
use tracerr::Traced;

use crate::{domain::geocoding, infra::http};

use super::{Error, Geocoding};

/// [`Google`] configuration.
#[derive(Debug)]
pub struct Config {
    /// [`http::Config`] of the geocoding endpoint.
    pub http: http::Config,

    /// API key requests are authorized with.
    #[debug(skip)]
    pub key: SecretString,

    /// Language the addresses are formatted in, e.g. `pt-BR`.
    pub language: Option<String>,
}

/// [`Geocoding`] backed by the Google Geocoding API.
#[derive(Debug)]
pub struct Google {
    /// [`http::Client`] of the geocoding endpoint.
    client: http::Client,

    /// API key requests are authorized with.
    #[debug(skip)]
    key: SecretString,

    /// Language the addresses are formatted in.
    language: Option<String>,
}

impl Google {
    /// Creates a new [`Google`] client out of the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the [`http::Client`] fails to initialize.
    pub fn new(conf: Config) -> Result<Self, Traced<http::Error>> {
        let Config {
            http,
            key,
            language,
        } = conf;
        Ok(Self {
            client: http::Client::new(&http).map_err(tracerr::wrap!())?,
            key,
            language,
        })
    }
}

impl Geocoding<Select<By<geocoding::Response, Coordinate>>> for Google {
    type Ok = geocoding::Response;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<geocoding::Response, Coordinate>>,
    ) -> Result<Self::Ok, Self::Err> {
        let latlng = by.into_inner().to_string();

        let mut query = vec![
            ("latlng", latlng.as_str()),
            ("key", self.key.expose_secret()),
        ];
        if let Some(lang) = &self.language {
            query.push(("language", lang.as_str()));
        }

        self.client
            .get_json::<Response>(&[], &query)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))
            .map(Into::into)
    }
}

/// Raw Google Geocoding API response.
#[derive(Debug, Deserialize)]
struct Response {
    /// Status of the lookup, `OK` on success.
    status: String,

    /// Found addresses.
    #[serde(default)]
    results: Vec<Place>,
}

/// Single address in a [`Response`].
#[derive(Debug, Deserialize)]
struct Place {
    /// Human-readable address.
    formatted_address: String,

    /// Type tags of the address.
    #[serde(default)]
    types: HashSet<String>,

    /// Location of the address.
    geometry: Geometry,
}

/// Geometry of a [`Place`].
#[derive(Debug, Deserialize)]
struct Geometry {
    /// Representative point of the address.
    location: LatLng,
}

/// Point in a [`Geometry`].
#[derive(Clone, Copy, Debug, Deserialize)]
struct LatLng {
    /// Latitude.
    lat: f64,

    /// Longitude.
    lng: f64,
}

impl From<Response> for geocoding::Response {
    fn from(resp: Response) -> Self {
        Self {
            status: geocoding::Status::parse(&resp.status),
            candidates: resp
                .results
                .into_iter()
                .map(|r| geocoding::AddressCandidate {
                    formatted_address: r.formatted_address,
                    types: r.types,
                    coordinate: Coordinate::new(
                        r.geometry.location.lat,
                        r.geometry.location.lng,
                    ),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Coordinate;

    use crate::domain::geocoding;

    use super::Response;

    #[test]
    fn converts_response() {
        let raw: Response = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [{
                    "formatted_address": "Rua Teste, 1111 - Centro",
                    "types": ["street_address"],
                    "geometry": {"location": {"lat": -27.59, "lng": -48.54}}
                }, {
                    "formatted_address": "Florianópolis, SC, Brazil",
                    "types": ["locality", "political"],
                    "geometry": {"location": {"lat": -27.5954, "lng": -48.548}}
                }]
            }"#,
        )
        .unwrap();

        let resp = geocoding::Response::from(raw);

        assert!(resp.status.is_ok());
        assert_eq!(resp.candidates.len(), 2);
        let locality = resp.locality().unwrap();
        assert_eq!(locality.formatted_address, "Florianópolis, SC, Brazil");
        assert_eq!(locality.coordinate, Coordinate::new(-27.5954, -48.548));
    }

    #[test]
    fn converts_denied_response() {
        let raw: Response = serde_json::from_str(
            r#"{"status": "REQUEST_DENIED", "error_message": "bad key"}"#,
        )
        .unwrap();

        let resp = geocoding::Response::from(raw);

        assert!(!resp.status.is_ok());
        assert!(resp.candidates.is_empty());
    }
}
