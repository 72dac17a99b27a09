//! [`Query`]s resolving the initial view of the search screen.

use std::convert::Infallible;

use common::{
    operations::{By, Select},
    Coordinate,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{city, geocoding as geo, marker, City, Listing, Marker},
    infra::{
        directory, geocoding, geolocation, geolocation::CurrentPosition,
        CityDirectory, Geocoding, Geolocation, ListingDirectory,
    },
    Service,
};

use super::Query;

/// [`Query`] resolving the device's current position into its [`City`] and
/// the [`Listing`]s around it, step by step:
///
/// 1. takes the current position from the [`Geolocation`];
/// 2. reverse geocodes it;
/// 3. picks the first locality among the address candidates;
/// 4. extracts the [`city::Locator`] out of its formatted address;
/// 5. fetches exactly one [`City`] by it;
/// 6. fetches the most recent [`Listing`]s of that [`City`];
/// 7. pins every [`Listing`] with a [`Marker`].
///
/// Unsupported geolocation and a non-`OK` geocoding status are not errors,
/// but [`Resolution::Unresolved`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TryResolveInitialView;

/// [`TryResolveInitialView`] swallowing its errors.
///
/// Any failure is logged and reported as [`Resolution::Unresolved`], so the
/// screen keeps its default center.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveInitialView;

/// Outcome of resolving the initial view.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Location resolved.
    Resolved(InitialView),

    /// Location cannot be resolved, so the default view stays.
    Unresolved,
}

impl Resolution {
    /// Returns the [`InitialView`], if resolved.
    #[must_use]
    pub fn view(&self) -> Option<&InitialView> {
        match self {
            Self::Resolved(v) => Some(v),
            Self::Unresolved => None,
        }
    }
}

/// Resolved initial view of the search screen.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialView {
    /// Map center: [`Coordinate`] of the picked locality.
    pub center: Coordinate,

    /// [`City`] the device is located in.
    pub city: City,

    /// [`Marker`]s of the [`InitialView::listings`], in the same order.
    pub markers: Vec<Marker>,

    /// Most recent [`Listing`]s of the [`InitialView::city`].
    pub listings: Vec<Listing>,
}

impl<Loc, Geo, Dir> Query<TryResolveInitialView> for Service<Loc, Geo, Dir>
where
    Loc: Geolocation<
        Select<CurrentPosition>,
        Ok = Coordinate,
        Err = Traced<geolocation::Error>,
    >,
    Geo: Geocoding<
        Select<By<geo::Response, Coordinate>>,
        Ok = geo::Response,
        Err = Traced<geocoding::Error>,
    >,
    Dir: CityDirectory<
            Select<By<City, city::Locator>>,
            Ok = City,
            Err = Traced<directory::Error>,
        > + ListingDirectory<
            Select<By<Vec<Listing>, city::Id>>,
            Ok = Vec<Listing>,
            Err = Traced<directory::Error>,
        >,
{
    type Ok = Resolution;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        _: TryResolveInitialView,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let position = match self
            .geolocation()
            .execute(Select(CurrentPosition))
            .await
        {
            Ok(pos) => pos,
            Err(e) if *e.as_ref() == geolocation::Error::Unsupported => {
                log::debug!("geolocation is unsupported, keeping default view");
                return Ok(Resolution::Unresolved);
            }
            Err(e) => {
                return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
            }
        };
        log::debug!("device is positioned at `{position}`");

        let resp = self
            .geocoding()
            .execute(Select(By::new(position)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let geo::Status::Other(status) = &resp.status {
            log::debug!("reverse geocoding of `{position}` replied `{status}`");
            return Ok(Resolution::Unresolved);
        }

        let candidate = resp
            .locality()
            .ok_or(E::NoLocality {
                candidates: resp.candidates.len(),
            })
            .map_err(tracerr::wrap!())?;
        let locator = city::parse_city_and_region(&candidate.formatted_address)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let city = self
            .directory()
            .execute(Select(By::<City, _>::new(locator)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let listings = self
            .directory()
            .execute(Select(By::<Vec<Listing>, _>::new(city.id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let markers =
            Marker::all_of(&listings).map_err(tracerr::from_and_wrap!(=> E))?;

        log::debug!(
            "resolved `{city}` with {} listings around `{}`",
            listings.len(),
            candidate.coordinate,
        );
        Ok(Resolution::Resolved(InitialView {
            center: candidate.coordinate,
            city,
            markers,
            listings,
        }))
    }
}

impl<Loc, Geo, Dir> Query<ResolveInitialView> for Service<Loc, Geo, Dir>
where
    Self: Query<
        TryResolveInitialView,
        Ok = Resolution,
        Err = Traced<ExecutionError>,
    >,
{
    type Ok = Resolution;
    type Err = Infallible;

    async fn execute(
        &self,
        _: ResolveInitialView,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.execute(TryResolveInitialView).await.unwrap_or_else(|e| {
            log::error!("failed to resolve initial view: {e}");
            Resolution::Unresolved
        }))
    }
}

/// Error of [`TryResolveInitialView`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Geolocation`] failed.
    #[display("`Geolocation` failed: {_0}")]
    Geolocation(geolocation::Error),

    /// [`Geocoding`] failed.
    #[display("`Geocoding` failed: {_0}")]
    Geocoding(geocoding::Error),

    /// None of the address candidates is a locality.
    #[display("none of {candidates} address candidates is a locality")]
    #[from(ignore)]
    NoLocality {
        /// Number of the address candidates returned.
        candidates: usize,
    },

    /// Locality address cannot be split into a city and a region.
    #[display("locality address is not recognized: {_0}")]
    Address(city::ParseError),

    /// [`CityDirectory`] or [`ListingDirectory`] failed.
    #[display("directory failed: {_0}")]
    Directory(directory::Error),

    /// Some [`Listing`] cannot be pinned.
    #[display("{_0}")]
    Marker(marker::Error),
}

impl ExecutionError {
    /// Indicates whether this [`ExecutionError`] means the collaborators
    /// replied fine, but their data cannot be resolved into a view.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::NoLocality { .. } | Self::Address(_) | Self::Marker(_),
        )
    }
}
