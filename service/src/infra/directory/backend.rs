//! [`Backend`] implementation of [`CityDirectory`] and [`ListingDirectory`].

use common::{
    operations::{By, Select},
    Area, Money,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        city::{self, City},
        listing::{self, Listing},
    },
    infra::http,
};

use super::{CityDirectory, Error, ListingDirectory};

/// Listing backend serving both cities and listings over HTTP.
#[derive(Clone, Debug)]
pub struct Backend {
    /// [`http::Client`] of the backend.
    client: http::Client,
}

impl Backend {
    /// Creates a new [`Backend`] client with the provided [`http::Config`].
    ///
    /// # Errors
    ///
    /// If the [`http::Client`] fails to initialize.
    pub fn new(conf: &http::Config) -> Result<Self, Traced<http::Error>> {
        Ok(Self {
            client: http::Client::new(conf).map_err(tracerr::wrap!())?,
        })
    }

    /// Fetches [`City`]s matching the provided `query`.
    async fn cities(
        &self,
        query: &[(&str, &str)],
    ) -> Result<Vec<City>, Traced<Error>> {
        Ok(self
            .client
            .get_json::<Vec<CityRecord>>(&["cities"], query)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?
            .into_iter()
            .filter_map(CityRecord::into_city)
            .collect())
    }
}

impl CityDirectory<Select<By<Vec<City>, city::SearchText>>> for Backend {
    type Ok = Vec<City>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<City>, city::SearchText>>,
    ) -> Result<Self::Ok, Self::Err> {
        let text = by.into_inner();
        self.cities(&[("name", text.as_str())])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl CityDirectory<Select<By<City, city::Locator>>> for Backend {
    type Ok = City;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<City, city::Locator>>,
    ) -> Result<Self::Ok, Self::Err> {
        let locator = by.into_inner();
        let mut found = self
            .cities(&[
                ("name", locator.name.as_str()),
                ("state", locator.region.as_str()),
            ])
            .await
            .map_err(tracerr::wrap!())?;

        // Backend matches loosely, so narrow down to the exact city.
        found.retain(|c| locator.matches(c));
        match found.len() {
            1 => Ok(found.swap_remove(0)),
            matches => {
                log::debug!("`{locator}` matched {matches} cities");
                Err(tracerr::new!(Error::NotFound { matches }))
            }
        }
    }
}

impl ListingDirectory<Select<By<Vec<Listing>, city::Id>>> for Backend {
    type Ok = Vec<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Listing>, city::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let city_id = by.into_inner().to_string();
        Ok(self
            .client
            .get_json::<Vec<ListingRecord>>(
                &["properties", "most-recent"],
                &[("cityId", city_id.as_str())],
            )
            .await
            .map_err(tracerr::map_from_and_wrap!(=> Error))?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

/// [`City`] as served by the backend.
#[derive(Debug, Deserialize)]
struct CityRecord {
    /// ID of the city.
    id: city::Id,

    /// Name of the city.
    name: String,

    /// State the city belongs to.
    state: StateRecord,
}

/// State of a [`CityRecord`].
#[derive(Debug, Deserialize)]
struct StateRecord {
    /// Full name of the state.
    name: String,

    /// Abbreviated code of the state.
    abbreviation: String,
}

impl CityRecord {
    /// Validates this [`CityRecord`] into a [`City`].
    fn into_city(self) -> Option<City> {
        let Self { id, name, state } = self;
        let city = City {
            id,
            name: city::Name::new(name.trim())?,
            region: city::Region {
                name: city::RegionName::new(state.name.trim())?,
                code: city::RegionCode::new(state.abbreviation.trim())?,
            },
        };
        Some(city)
    }
}

/// [`Listing`] as served by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingRecord {
    /// ID of the listing.
    id: listing::Id,

    /// JSON-encoded address of the listing.
    #[serde(default)]
    address_data: Option<String>,

    /// Price in Brazilian Reais.
    #[serde(default)]
    price: Option<Decimal>,

    /// `SALE` or `RENT`.
    #[serde(default)]
    availability: Option<String>,

    /// Numeric [`listing::Kind`].
    #[serde(default, rename = "type")]
    kind: Option<u8>,

    /// Number of bedrooms.
    #[serde(default)]
    bedrooms: Option<u8>,

    /// Number of bathrooms.
    #[serde(default)]
    bathrooms: Option<u8>,

    /// Number of garage spots.
    #[serde(default)]
    garages: Option<u8>,

    /// Total area in square meters.
    #[serde(default)]
    area: Option<Decimal>,
}

impl From<ListingRecord> for Listing {
    fn from(r: ListingRecord) -> Self {
        Self {
            id: r.id,
            address_data: r.address_data.map(listing::AddressData::from),
            price: r.price.map(Money::brl),
            availability: r
                .availability
                .and_then(|a| a.trim().to_uppercase().parse().ok()),
            kind: r.kind.and_then(listing::Kind::from_u8),
            rooms: listing::Rooms {
                bedrooms: r.bedrooms,
                bathrooms: r.bathrooms,
                garages: r.garages,
            },
            area: r.area.and_then(Area::new),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Coordinate;

    use crate::domain::{city, listing, Listing};

    use super::{CityRecord, ListingRecord};

    #[test]
    fn converts_city() {
        let record: CityRecord = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "Florianópolis",
                "state": {"name": "Santa Catarina", "abbreviation": "SC"}
            }"#,
        )
        .unwrap();

        let city = record.into_city().unwrap();

        assert_eq!(city.id, city::Id::from(42));
        assert_eq!(city.to_string(), "Florianópolis, Santa Catarina");
    }

    #[test]
    fn skips_invalid_city() {
        let record: CityRecord = serde_json::from_str(
            r#"{"id": 1, "name": " ", "state": {"name": "X", "abbreviation": "X"}}"#,
        )
        .unwrap();

        assert!(record.into_city().is_none());
    }

    #[test]
    fn converts_listing() {
        let record: ListingRecord = serde_json::from_str(
            r#"{
                "id": 7,
                "addressData": "{\"latitude\": -27.6, \"longitude\": -48.55}",
                "price": 1500000,
                "availability": "sale",
                "type": 1,
                "bedrooms": 2,
                "bathrooms": 2,
                "garages": 1,
                "area": 60
            }"#,
        )
        .unwrap();

        let got = Listing::from(record);

        assert_eq!(got.id, listing::Id::from(7));
        assert_eq!(got.availability, Some(listing::Availability::Sale));
        assert_eq!(got.kind, Some(listing::Kind::Apartment));
        assert_eq!(got.rooms.garages, Some(1));
        assert_eq!(got.price.unwrap().to_string(), "1500000BRL");
        assert_eq!(
            got.coordinate().unwrap(),
            Coordinate::new(-27.6, -48.55),
        );
    }

    #[test]
    fn tolerates_sparse_listing() {
        let record: ListingRecord =
            serde_json::from_str(r#"{"id": 8, "type": 99}"#).unwrap();

        let got = Listing::from(record);

        assert_eq!(got.kind, None);
        assert!(got.address_data.is_none());
    }
}
