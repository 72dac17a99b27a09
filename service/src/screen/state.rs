//! [`State`] of the search screen and its [`Event`]s.

use common::{define_kind, Coordinate};

use crate::domain::{
    filter,
    listing::{self, PropertyType},
    City, Filters, Listing, Marker,
};

define_kind! {
    #[doc = "Way the search results are presented."]
    enum SearchMode {
        #[doc = "Pins on a map."]
        Map = 1,

        #[doc = "Cards in a grid."]
        Grid = 2,
    }
}

/// Map center of the search screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Center {
    /// Configured fallback, used until the device's location is resolved.
    Default(Coordinate),

    /// Coordinate of the locality the device is in.
    Resolved(Coordinate),
}

impl Center {
    /// Returns the [`Coordinate`] of this [`Center`].
    #[must_use]
    pub const fn coordinate(self) -> Coordinate {
        match self {
            Self::Default(c) | Self::Resolved(c) => c,
        }
    }
}

/// Search results shown on the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Results {
    /// Map [`Center`].
    pub center: Center,

    /// [`Marker`]s of the [`Results::listings`].
    pub markers: Vec<Marker>,

    /// Found [`Listing`]s.
    pub listings: Vec<Listing>,
}

/// Whole state of the search screen.
///
/// Never mutated in place: every [`Event`] produces a new [`State`].
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// Whether the search form is expanded.
    pub search_form_visible: bool,

    /// Whether the listing details are expanded.
    pub details_visible: bool,

    /// Current [`SearchMode`].
    pub mode: SearchMode,

    /// [`City`] picked in the autocomplete, if any.
    pub selected_city: Option<City>,

    /// [`Filters`] typed into the search form.
    ///
    /// They only record what the user wants and never narrow the
    /// [`Results`].
    pub filters: Filters,

    /// [`City`]s offered by the autocomplete.
    pub city_options: Vec<City>,

    /// [`City`]s offered by the city filter of the search form.
    ///
    /// Always the default set, whatever is typed into the autocomplete.
    pub city_choices: Vec<City>,

    /// Property types offered by the search form.
    pub property_types: Vec<PropertyType>,

    /// Current [`Results`].
    pub results: Results,
}

impl State {
    /// Creates the initial [`State`] centered at the provided
    /// `default_center`.
    #[must_use]
    pub fn new(default_center: Coordinate) -> Self {
        Self {
            search_form_visible: false,
            details_visible: false,
            mode: SearchMode::Map,
            selected_city: None,
            filters: Filters::default(),
            city_options: Vec::new(),
            city_choices: Vec::new(),
            property_types: listing::property_types(),
            results: Results {
                center: Center::Default(default_center),
                markers: Vec::new(),
                listings: Vec::new(),
            },
        }
    }

    /// Returns the current map center.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.results.center.coordinate()
    }

    /// Applies the provided [`Event`] to this [`State`].
    #[must_use]
    pub fn apply(self, event: Event) -> Self {
        match event {
            Event::ToggleSearchForm => Self {
                search_form_visible: !self.search_form_visible,
                ..self
            },
            Event::SubmitSearch | Event::CancelSearch => Self {
                search_form_visible: false,
                ..self
            },
            Event::ToggleDetails => Self {
                details_visible: !self.details_visible,
                ..self
            },
            Event::SwitchMode(mode) => Self { mode, ..self },
            Event::ChangeFilter(change) => Self {
                filters: self.filters.apply(change),
                ..self
            },
            Event::ClearFilters => Self {
                filters: Filters::default(),
                ..self
            },
            Event::SelectCity(selected_city) => Self {
                selected_city,
                ..self
            },
        }
    }
}

/// User interaction with the search screen.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Search form button is pressed.
    ToggleSearchForm,

    /// Search form is submitted.
    SubmitSearch,

    /// Search form is dismissed.
    CancelSearch,

    /// Listing details are expanded or collapsed.
    ToggleDetails,

    /// Another [`SearchMode`] is picked.
    SwitchMode(SearchMode),

    /// A single filter field is edited.
    ChangeFilter(filter::Change),

    /// All the filters are reset.
    ClearFilters,

    /// A [`City`] is picked in the autocomplete, or the pick is cleared.
    SelectCity(Option<City>),
}

#[cfg(test)]
mod spec {
    use common::Coordinate;

    use crate::domain::{filter, listing, Filters};

    use super::{Center, Event, SearchMode, State};

    const CENTER: Coordinate = Coordinate::new(-27.558_532_5, -48.497_110_3);

    #[test]
    fn starts_collapsed_on_map() {
        let state = State::new(CENTER);

        assert!(!state.search_form_visible);
        assert!(!state.details_visible);
        assert_eq!(state.mode, SearchMode::Map);
        assert_eq!(state.selected_city, None);
        assert!(state.filters.is_empty());
        assert!(state.city_options.is_empty());
        assert!(state.city_choices.is_empty());
        assert_eq!(state.property_types.len(), listing::Kind::ALL.len());
        assert_eq!(state.results.center, Center::Default(CENTER));
        assert_eq!(state.center(), CENTER);
        assert!(state.results.markers.is_empty());
    }

    #[test]
    fn toggles_search_form() {
        let state = State::new(CENTER).apply(Event::ToggleSearchForm);
        assert!(state.search_form_visible);

        let state = state.apply(Event::ToggleSearchForm);
        assert!(!state.search_form_visible);
    }

    #[test]
    fn submit_and_cancel_close_search_form() {
        for event in [Event::SubmitSearch, Event::CancelSearch] {
            let state = State::new(CENTER)
                .apply(Event::ToggleSearchForm)
                .apply(event.clone());
            assert!(!state.search_form_visible, "{event:?}");

            let state = State::new(CENTER).apply(event.clone());
            assert!(!state.search_form_visible, "{event:?}");
        }
    }

    #[test]
    fn toggles_details_independently() {
        let state = State::new(CENTER)
            .apply(Event::ToggleSearchForm)
            .apply(Event::ToggleDetails);

        assert!(state.search_form_visible);
        assert!(state.details_visible);
    }

    #[test]
    fn switches_mode() {
        let state = State::new(CENTER).apply(Event::SwitchMode(SearchMode::Grid));
        assert_eq!(state.mode, SearchMode::Grid);

        let state = state.apply(Event::SwitchMode(SearchMode::Grid));
        assert_eq!(state.mode, SearchMode::Grid);
    }

    #[test]
    fn records_and_clears_filters() {
        let state = State::new(CENTER)
            .apply(Event::ChangeFilter(filter::Change::Kind(Some(
                listing::Kind::House,
            ))))
            .apply(Event::ChangeFilter(filter::Change::Bedrooms(Some(
                filter::Count::Two,
            ))));

        assert_eq!(state.filters.kind, Some(listing::Kind::House));
        assert_eq!(state.filters.bedrooms, Some(filter::Count::Two));
        assert!(state.results.markers.is_empty());

        let state = state.apply(Event::ClearFilters);
        assert_eq!(state.filters, Filters::default());
    }

    #[test]
    fn filters_leave_results_untouched() {
        let before = State::new(CENTER);
        let after = before.clone().apply(Event::ChangeFilter(
            filter::Change::Availability(Some(listing::Availability::Rent)),
        ));

        assert_eq!(after.results, before.results);
    }
}
