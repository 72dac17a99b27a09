//! [`Geolocation`]-related implementations.

#[cfg(feature = "http")]
mod ip;

use common::{operations::Select, Coordinate};
use derive_more::{Display, Error as StdError};
use tracerr::Traced;

#[cfg(feature = "http")]
pub use self::ip::IpLookup;

/// Source of the device's current position.
pub use common::Handler as Geolocation;

/// [`Geolocation`] target: current position of the device, taken once.
#[derive(Clone, Copy, Debug)]
pub struct CurrentPosition;

/// [`Geolocation`] error.
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Platform has no way to determine the position at all.
    #[display("geolocation is not supported")]
    Unsupported,

    /// User or platform denied access to the position.
    #[display("geolocation permission denied")]
    Permission,

    /// Position was not determined in time.
    #[display("geolocation timed out")]
    Timeout,

    /// Position cannot be determined right now.
    #[display("position unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),
}

/// [`Geolocation`] of a platform without any positioning capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unsupported;

impl Geolocation<Select<CurrentPosition>> for Unsupported {
    type Ok = Coordinate;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<CurrentPosition>,
    ) -> Result<Self::Ok, Self::Err> {
        Err(tracerr::new!(Error::Unsupported))
    }
}

/// [`Geolocation`] always reporting the same configured position.
#[derive(Clone, Copy, Debug)]
pub struct Fixed(pub Coordinate);

impl Geolocation<Select<CurrentPosition>> for Fixed {
    type Ok = Coordinate;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<CurrentPosition>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0)
    }
}

/// [`Geolocation`] chosen by configuration.
#[derive(Clone, Debug)]
pub enum Provider {
    /// [`Unsupported`] [`Geolocation`].
    Unsupported(Unsupported),

    /// [`Fixed`] [`Geolocation`].
    Fixed(Fixed),

    /// [`IpLookup`] [`Geolocation`].
    #[cfg(feature = "http")]
    Ip(IpLookup),
}

impl Geolocation<Select<CurrentPosition>> for Provider {
    type Ok = Coordinate;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        op: Select<CurrentPosition>,
    ) -> Result<Self::Ok, Self::Err> {
        match self {
            Self::Unsupported(g) => g.execute(op).await,
            Self::Fixed(g) => g.execute(op).await,
            #[cfg(feature = "http")]
            Self::Ip(g) => g.execute(op).await,
        }
        .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::{operations::Select, Coordinate};

    use super::{
        CurrentPosition, Error, Fixed, Geolocation as _, Provider, Unsupported,
    };

    #[tokio::test]
    async fn fixed_reports_its_position() {
        let pos = Coordinate::new(-27.5945, -48.5477);

        let got = Provider::Fixed(Fixed(pos))
            .execute(Select(CurrentPosition))
            .await
            .unwrap();

        assert_eq!(got, pos);
    }

    #[tokio::test]
    async fn unsupported_fails() {
        let err = Provider::Unsupported(Unsupported)
            .execute(Select(CurrentPosition))
            .await
            .unwrap_err();

        assert_eq!(*err.as_ref(), Error::Unsupported);
    }
}
