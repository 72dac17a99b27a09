//! [`City`] definitions.

use std::fmt;

use derive_more::{AsRef, Display, Error, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// City listings are searched in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct City {
    /// ID of this [`City`].
    pub id: Id,

    /// [`Name`] of this [`City`].
    pub name: Name,

    /// [`Region`] this [`City`] belongs to.
    pub region: Region,
}

/// Formats as `{name}, {region name}`, the label shown in the autocomplete.
impl Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.region.name)
    }
}

/// ID of a [`City`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(u64);

/// Name of a [`City`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Returns this [`Name`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `city::Name`")
    }
}

/// Administrative region (state) a [`City`] belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Region {
    /// Full name of this [`Region`], e.g. `Santa Catarina`.
    pub name: RegionName,

    /// [`RegionCode`] of this [`Region`], e.g. `SC`.
    pub code: RegionCode,
}

/// Full name of a [`Region`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct RegionName(String);

impl RegionName {
    /// Creates a new [`RegionName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Returns this [`RegionName`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given `name` is a valid [`RegionName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

/// Abbreviated code of a [`Region`], e.g. `SC`.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Creates a new [`RegionCode`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        Self::check(&code).then_some(Self(code))
    }

    /// Returns this [`RegionCode`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given `code` is a valid [`RegionCode`].
    fn check(code: impl AsRef<str>) -> bool {
        let code = code.as_ref();
        code.trim() == code
            && !code.is_empty()
            && code.len() <= 8
            && !code.contains(char::is_whitespace)
    }
}

impl FromStr for RegionCode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `city::RegionCode`")
    }
}

/// Free text a [`City`] is searched by.
///
/// Always trimmed. May be empty, in which case the directory returns its
/// default set of cities.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct SearchText(String);

impl SearchText {
    /// Creates a new [`SearchText`] out of the raw user input.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_owned())
    }

    /// Returns this [`SearchText`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Indicates whether this [`SearchText`] asks for the default set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Exact location of a single [`City`]: its [`Name`] and [`RegionCode`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Locator {
    /// [`Name`] of the [`City`].
    pub name: Name,

    /// [`RegionCode`] of the [`Region`] the [`City`] belongs to.
    pub region: RegionCode,
}

impl Locator {
    /// Checks whether the provided [`City`] is the one located by this
    /// [`Locator`].
    ///
    /// Comparison ignores letter case.
    #[must_use]
    pub fn matches(&self, city: &City) -> bool {
        city.name.as_str().to_lowercase() == self.name.as_str().to_lowercase()
            && city
                .region
                .code
                .as_str()
                .eq_ignore_ascii_case(self.region.as_str())
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.region)
    }
}

/// Extracts a [`Locator`] out of a formatted address like
/// `Florianópolis, SC, Brazil`.
///
/// The first comma-separated segment is the city name and the second one is
/// the region code. This holds for the way Google formats Brazilian
/// localities and nothing else; other locales need another parser.
///
/// # Errors
///
/// If the address has less than two segments or any of them is empty.
pub fn parse_city_and_region(
    formatted_address: &str,
) -> Result<Locator, ParseError> {
    let mut segments = formatted_address.split(',').map(str::trim);

    let name = segments
        .next()
        .and_then(Name::new)
        .ok_or(ParseError::CityName)?;
    let region = segments
        .next()
        .ok_or(ParseError::MissingRegion)
        .and_then(|s| RegionCode::new(s).ok_or(ParseError::RegionCode))?;

    Ok(Locator { name, region })
}

/// Error of [`parse_city_and_region()`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// First segment is not a valid [`Name`].
    #[display("address does not start with a city name")]
    CityName,

    /// Address has a single segment.
    #[display("address has no region segment")]
    MissingRegion,

    /// Second segment is not a valid [`RegionCode`].
    #[display("second address segment is not a region code")]
    RegionCode,
}

#[cfg(test)]
mod spec {
    use super::{parse_city_and_region, ParseError, SearchText};

    #[test]
    fn parses_brazilian_locality() {
        let locator = parse_city_and_region("Florianópolis, SC, Brazil")
            .unwrap();

        assert_eq!(locator.name.as_str(), "Florianópolis");
        assert_eq!(locator.region.as_str(), "SC");
    }

    #[test]
    fn accepts_exactly_two_segments() {
        let locator = parse_city_and_region("  São José ,SC").unwrap();

        assert_eq!(locator.name.as_str(), "São José");
        assert_eq!(locator.region.as_str(), "SC");
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(
            parse_city_and_region("Florianópolis"),
            Err(ParseError::MissingRegion),
        );
        assert_eq!(parse_city_and_region(""), Err(ParseError::CityName));
        assert_eq!(
            parse_city_and_region(" , SC, Brazil"),
            Err(ParseError::CityName),
        );
        assert_eq!(
            parse_city_and_region("Florianópolis, , Brazil"),
            Err(ParseError::RegionCode),
        );
        assert_eq!(
            parse_city_and_region("Florianópolis, Santa Catarina, Brazil"),
            Err(ParseError::RegionCode),
        );
    }

    #[test]
    fn search_text_is_trimmed() {
        assert_eq!(SearchText::new("  flor ").as_str(), "flor");
        assert!(SearchText::new("   ").is_empty());
    }
}
