//! Controller of the property search [`Screen`].

pub mod state;

use std::{convert::Infallible, fmt, marker::PhantomData};

use common::Coordinate;
use derive_more::Debug;
use tracing as log;

use crate::{
    domain::{city, City},
    query::{self, initial_view::Resolution},
    Query,
};

pub use self::state::{Center, Event, Results, SearchMode, State};

/// Ticket of an in-flight request started by a [`Screen`].
///
/// Only the latest [`Ticket`] of its kind is honored when the request
/// finishes, so a slow reply never overwrites a newer one.
#[derive(Debug)]
pub struct Ticket<Of: ?Sized> {
    /// Generation this [`Ticket`] was issued at.
    generation: u64,

    /// Type parameter describing the kind of the request.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> Ticket<Of> {
    /// Issues the [`Ticket`] following the provided `latest` one.
    fn next(latest: &mut u64) -> Self {
        *latest = latest.wrapping_add(1);
        Self {
            generation: *latest,
            _of: PhantomData,
        }
    }

    /// Checks whether this [`Ticket`] is the `latest` issued one.
    const fn is_latest(&self, latest: u64) -> bool {
        self.generation == latest
    }
}

impl<Of: ?Sized> Clone for Ticket<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Copy for Ticket<Of> {}

impl<Of: ?Sized> PartialEq for Ticket<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation
    }
}

impl<Of: ?Sized> Eq for Ticket<Of> {}

/// Search screen: its [`State`] plus the bookkeeping of in-flight requests.
#[derive(Clone, Debug)]
pub struct Screen {
    /// Current [`State`].
    state: State,

    /// Latest issued [`Ticket`] generation of initial view resolutions.
    resolution: u64,

    /// Latest issued [`Ticket`] generation of city searches.
    city_search: u64,

    /// Generation of the latest city search for the default set, if any.
    default_city_search: Option<u64>,
}

impl Screen {
    /// Creates a new [`Screen`] in its initial [`State`].
    #[must_use]
    pub fn new(default_center: Coordinate) -> Self {
        Self {
            state: State::new(default_center),
            resolution: 0,
            city_search: 0,
            default_city_search: None,
        }
    }

    /// Returns the current [`State`] of this [`Screen`].
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Applies the provided [`Event`] to this [`Screen`].
    pub fn dispatch(&mut self, event: Event) {
        log::trace!("dispatching `{event:?}`");
        self.state = self.state.clone().apply(event);
    }

    /// Starts resolving the initial view.
    pub fn begin_resolution(&mut self) -> Ticket<Resolution> {
        Ticket::next(&mut self.resolution)
    }

    /// Finishes the initial view resolution issued the provided [`Ticket`].
    ///
    /// [`Resolution::Unresolved`] keeps the current [`Results`]. Returns
    /// `false` if the [`Ticket`] is stale and the [`Resolution`] is dropped.
    pub fn finish_resolution(
        &mut self,
        ticket: Ticket<Resolution>,
        resolution: Resolution,
    ) -> bool {
        if !ticket.is_latest(self.resolution) {
            log::debug!("dropping stale initial view resolution");
            return false;
        }
        if let Resolution::Resolved(view) = resolution {
            self.state = State {
                results: Results {
                    center: Center::Resolved(view.center),
                    markers: view.markers,
                    listings: view.listings,
                },
                ..self.state.clone()
            };
        }
        true
    }

    /// Starts searching [`City`]s by the provided [`city::SearchText`].
    pub fn begin_city_search(
        &mut self,
        text: &city::SearchText,
    ) -> Ticket<Vec<City>> {
        log::debug!("searching cities by `{text}`");
        let ticket = Ticket::next(&mut self.city_search);
        if text.is_empty() {
            self.default_city_search = Some(ticket.generation);
        }
        ticket
    }

    /// Finishes the city search issued the provided [`Ticket`].
    ///
    /// The latest search replaces the [`State::city_options`], and the latest
    /// search for the default set replaces the [`State::city_choices`]. A
    /// failed search keeps both. Returns `false` if the [`Ticket`] is stale
    /// for the autocomplete or the search failed.
    pub fn finish_city_search<E: fmt::Display>(
        &mut self,
        ticket: Ticket<Vec<City>>,
        result: Result<Vec<City>, E>,
    ) -> bool {
        let is_latest = ticket.is_latest(self.city_search);
        let is_default = self.default_city_search == Some(ticket.generation);
        if !is_latest && !is_default {
            log::debug!("dropping stale city search");
            return false;
        }
        match result {
            Ok(cities) => {
                let mut state = self.state.clone();
                if is_default {
                    state.city_choices.clone_from(&cities);
                }
                if is_latest {
                    state.city_options = cities;
                }
                self.state = state;
                is_latest
            }
            Err(e) => {
                log::warn!("city search failed: {e}");
                false
            }
        }
    }

    /// Resolves the initial view with the provided [`Query`] executor.
    pub async fn resolve_initial_view<Svc>(&mut self, svc: &Svc)
    where
        Svc: Query<
            query::ResolveInitialView,
            Ok = Resolution,
            Err = Infallible,
        >,
    {
        let ticket = self.begin_resolution();
        let resolution = match svc.execute(query::ResolveInitialView).await {
            Ok(r) => r,
            Err(e) => match e {},
        };
        _ = self.finish_resolution(ticket, resolution);
    }

    /// Searches [`City`]s with the provided [`Query`] executor and offers
    /// them in the autocomplete.
    pub async fn search_cities<Svc>(
        &mut self,
        svc: &Svc,
        text: city::SearchText,
    ) where
        Svc: Query<query::cities::ByText, Ok = Vec<City>, Err: fmt::Display>,
    {
        let ticket = self.begin_city_search(&text);
        let result = svc.execute(query::cities::ByText::by(text)).await;
        _ = self.finish_city_search(ticket, result);
    }

    /// Primes the autocomplete with the default set of [`City`]s.
    pub async fn prime_city_options<Svc>(&mut self, svc: &Svc)
    where
        Svc: Query<query::cities::ByText, Ok = Vec<City>, Err: fmt::Display>,
    {
        self.search_cities(svc, city::SearchText::default()).await;
    }
}
