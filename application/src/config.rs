//! [`Config`]-related definitions.

use std::time;

use common::Coordinate;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error as StdError};
use secrecy::SecretString;
use serde::Deserialize;
use service::infra::{geocoding, geolocation, http};
use smart_default::SmartDefault;
use tracerr::Traced;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Search screen configuration.
    #[serde(default)]
    pub screen: Screen,

    /// Geolocation configuration.
    #[serde(default)]
    pub geolocation: Geolocation,

    /// Reverse geocoding configuration.
    #[serde(default)]
    pub geocoding: Geocoding,

    /// Listing backend configuration.
    #[serde(default)]
    pub directory: Directory,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Search screen configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Screen {
    /// Map center shown until the device's location is resolved.
    #[default(service::Config::default().default_center)]
    pub default_center: Coordinate,
}

impl From<Screen> for service::Config {
    fn from(value: Screen) -> Self {
        let Screen { default_center } = value;
        Self { default_center }
    }
}

/// Geolocation configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Geolocation {
    /// Source of the device's position.
    pub provider: GeolocationProvider,

    /// Latitude reported by the [`GeolocationProvider::Fixed`].
    pub latitude: f64,

    /// Longitude reported by the [`GeolocationProvider::Fixed`].
    pub longitude: f64,

    /// URL of the [`GeolocationProvider::Ip`] lookup service.
    #[default("http://ip-api.com/json".to_owned())]
    pub url: String,

    /// Timeout of a single lookup.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl Geolocation {
    /// Builds the configured [`geolocation::Provider`].
    ///
    /// # Errors
    ///
    /// If the [`Geolocation::url`] is invalid or the HTTP client fails to
    /// initialize.
    pub fn provider(&self) -> Result<geolocation::Provider, Error> {
        Ok(match self.provider {
            GeolocationProvider::None => {
                geolocation::Provider::Unsupported(geolocation::Unsupported)
            }
            GeolocationProvider::Fixed => {
                let pos = Coordinate::new(self.latitude, self.longitude);
                if !pos.is_valid() {
                    return Err(Error::Coordinate(pos));
                }
                geolocation::Provider::Fixed(geolocation::Fixed(pos))
            }
            GeolocationProvider::Ip => {
                let conf = endpoint(&self.url, self.timeout)?;
                geolocation::Provider::Ip(
                    geolocation::IpLookup::new(&conf)
                        .map_err(Error::Client)?,
                )
            }
        })
    }
}

/// Source of the device's position.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationProvider {
    /// Geolocation is not supported.
    None,

    /// Configured fixed position.
    Fixed,

    /// Position approximated by the public IP address.
    #[default]
    Ip,
}

/// Reverse geocoding configuration.
#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Geocoding {
    /// URL of the geocoding endpoint.
    #[default(
        "https://maps.googleapis.com/maps/api/geocode/json".to_owned()
    )]
    pub url: String,

    /// API key of the geocoding service.
    #[default(SecretString::from(String::new()))]
    pub key: SecretString,

    /// Language the addresses are formatted in.
    #[default(Some("pt-BR".to_owned()))]
    pub language: Option<String>,

    /// Timeout of a single lookup.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl Geocoding {
    /// Builds the configured [`geocoding::Google`] client.
    ///
    /// # Errors
    ///
    /// If the [`Geocoding::url`] is invalid or the HTTP client fails to
    /// initialize.
    pub fn client(self) -> Result<geocoding::Google, Error> {
        let Self {
            url,
            key,
            language,
            timeout,
        } = self;
        geocoding::Google::new(geocoding::Config {
            http: endpoint(&url, timeout)?,
            key,
            language,
        })
        .map_err(Error::Client)
    }
}

/// Listing backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Directory {
    /// Base URL of the listing backend API.
    #[default("http://localhost:8080/api".to_owned())]
    pub url: String,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl Directory {
    /// Builds the configured [`service::infra::Backend`] client.
    ///
    /// # Errors
    ///
    /// If the [`Directory::url`] is invalid or the HTTP client fails to
    /// initialize.
    pub fn client(&self) -> Result<service::infra::Backend, Error> {
        let conf = endpoint(&self.url, self.timeout)?;
        service::infra::Backend::new(&conf)
            .map_err(Error::Client)
    }
}

/// Parses the provided `url` into an [`http::Config`].
fn endpoint(url: &str, timeout: time::Duration) -> Result<http::Config, Error> {
    let url = http::Url::parse(url).map_err(|e| Error::Url {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(http::Config { url, timeout })
}

/// Error of building collaborators out of a [`Config`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Configured URL cannot be parsed.
    #[display("`{url}` is not a valid URL: {reason}")]
    Url {
        /// Offending URL.
        url: String,

        /// Parsing error.
        reason: String,
    },

    /// Configured fixed position lies outside of the globe.
    #[display("`{_0}` is not a valid position")]
    Coordinate(#[error(not(source))] Coordinate),

    /// HTTP client cannot be initialized.
    #[display("failed to initialize HTTP client: {_0}")]
    Client(Traced<http::Error>),
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time;

    use common::Coordinate;
    use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
    use secrecy::ExposeSecret as _;
    use service::infra::geolocation;

    use super::{Config, GeolocationProvider};

    fn parse(toml: &str) -> Config {
        ConfigBuilder::<DefaultState>::default()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_are_sane() {
        let conf = parse("");

        assert_eq!(conf.geolocation.provider, GeolocationProvider::Ip);
        assert_eq!(conf.geolocation.url, "http://ip-api.com/json");
        assert_eq!(conf.geolocation.timeout, time::Duration::from_secs(10));
        assert_eq!(conf.geocoding.language.as_deref(), Some("pt-BR"));
        assert_eq!(conf.directory.url, "http://localhost:8080/api");
        assert_eq!(
            service::Config::from(conf.screen).default_center,
            Coordinate::new(-27.558_532_5, -48.497_110_3),
        );
    }

    #[test]
    fn reads_sections() {
        let conf = parse(
            r#"
            [screen.default_center]
            latitude = -23.55
            longitude = -46.63

            [geolocation]
            provider = "fixed"
            latitude = -27.5945
            longitude = -48.5477

            [geocoding]
            key = "abc"
            timeout = "3s"

            [log]
            level = "DEBUG"
            "#,
        );

        assert_eq!(
            service::Config::from(conf.screen).default_center,
            Coordinate::new(-23.55, -46.63),
        );
        assert_eq!(conf.geocoding.key.expose_secret(), "abc");
        assert_eq!(conf.geocoding.timeout, time::Duration::from_secs(3));
        assert_eq!(tracing::Level::from(conf.log.level), tracing::Level::DEBUG);
        assert!(matches!(
            conf.geolocation.provider().unwrap(),
            geolocation::Provider::Fixed(geolocation::Fixed(pos))
                if pos == Coordinate::new(-27.5945, -48.5477),
        ));
    }

    #[test]
    fn rejects_invalid_fixed_position() {
        let conf = parse(
            r#"
            [geolocation]
            provider = "fixed"
            latitude = 91.0
            "#,
        );

        assert!(conf.geolocation.provider().is_err());
    }

    #[test]
    fn rejects_invalid_url() {
        let conf = parse(
            r#"
            [directory]
            url = "not a url"
            "#,
        );

        assert!(conf.directory.client().is_err());
    }

    #[test]
    fn disables_geolocation() {
        let conf = parse(
            r#"
            [geolocation]
            provider = "none"
            "#,
        );

        assert!(matches!(
            conf.geolocation.provider().unwrap(),
            geolocation::Provider::Unsupported(_),
        ));
    }
}
