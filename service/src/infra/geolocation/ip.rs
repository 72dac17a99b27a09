//! [`IpLookup`] [`Geolocation`] implementation.

use common::{operations::Select, Coordinate};
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::infra::http;

use super::{CurrentPosition, Error, Geolocation};

/// [`Geolocation`] approximating the device's position by its public IP
/// address via an [ip-api] compatible service.
///
/// [ip-api]: https://ip-api.com/docs/api:json
#[derive(Clone, Debug)]
pub struct IpLookup {
    /// [`http::Client`] of the lookup service.
    client: http::Client,
}

impl IpLookup {
    /// Creates a new [`IpLookup`] querying the service at the provided
    /// [`http::Config`].
    ///
    /// # Errors
    ///
    /// If the [`http::Client`] fails to initialize.
    pub fn new(conf: &http::Config) -> Result<Self, Traced<http::Error>> {
        Ok(Self {
            client: http::Client::new(conf).map_err(tracerr::wrap!())?,
        })
    }
}

impl Geolocation<Select<CurrentPosition>> for IpLookup {
    type Ok = Coordinate;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<CurrentPosition>,
    ) -> Result<Self::Ok, Self::Err> {
        let resp = self
            .client
            .get_json::<Response>(
                &[],
                &[("fields", "status,message,lat,lon")],
            )
            .await
            .map_err(|e| {
                log::debug!("IP geolocation request failed: {e}");
                tracerr::new!(classify(e.as_ref()))
            })?;

        resp.coordinate().map_err(|e| tracerr::new!(e))
    }
}

/// Maps a transport [`http::Error`] onto a geolocation [`Error`].
fn classify(err: &http::Error) -> Error {
    if err.is_timeout() {
        return Error::Timeout;
    }
    match err.status() {
        Some(http::StatusCode::UNAUTHORIZED | http::StatusCode::FORBIDDEN) => {
            Error::Permission
        }
        Some(_) | None => Error::Unavailable(err.to_string()),
    }
}

/// Response of the IP lookup service.
#[derive(Debug, Deserialize)]
struct Response {
    /// `success` or `fail`.
    status: String,

    /// Reason of a `fail`.
    #[serde(default)]
    message: Option<String>,

    /// Latitude of the IP address.
    #[serde(default)]
    lat: Option<f64>,

    /// Longitude of the IP address.
    #[serde(default)]
    lon: Option<f64>,
}

impl Response {
    /// Extracts a valid [`Coordinate`] out of this [`Response`].
    fn coordinate(self) -> Result<Coordinate, Error> {
        if self.status != "success" {
            return Err(Error::Unavailable(
                self.message.unwrap_or(self.status),
            ));
        }
        self.lat
            .zip(self.lon)
            .map(|(lat, lon)| Coordinate::new(lat, lon))
            .filter(Coordinate::is_valid)
            .ok_or_else(|| {
                Error::Unavailable("lookup returned no coordinate".to_owned())
            })
    }
}

#[cfg(test)]
mod spec {
    use common::Coordinate;

    use crate::infra::http;

    use super::{classify, Error, Response};

    fn response(json: &str) -> Response {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reads_successful_lookup() {
        let resp = response(
            r#"{"status":"success","lat":-27.5945,"lon":-48.5477}"#,
        );

        assert_eq!(
            resp.coordinate().unwrap(),
            Coordinate::new(-27.5945, -48.5477),
        );
    }

    #[test]
    fn failed_lookup_is_unavailable() {
        let resp = response(r#"{"status":"fail","message":"private range"}"#);

        assert_eq!(
            resp.coordinate().unwrap_err(),
            Error::Unavailable("private range".into()),
        );
    }

    #[test]
    fn forbidden_is_permission_error() {
        assert_eq!(
            classify(&http::Error::Status(http::StatusCode::FORBIDDEN)),
            Error::Permission,
        );
        assert!(matches!(
            classify(&http::Error::Status(http::StatusCode::BAD_GATEWAY)),
            Error::Unavailable(_),
        ));
    }
}
