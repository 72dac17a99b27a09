//! [`Query`] collection related to multiple [`City`]s.

use common::operations::By;

use crate::domain::{city, City};
#[cfg(doc)]
use crate::Query;

use super::DirectoryQuery;

/// Searches [`City`]s by a free-form [`city::SearchText`].
///
/// An empty [`city::SearchText`] yields the default set offered before the
/// user types anything.
pub type ByText = DirectoryQuery<By<Vec<City>, city::SearchText>>;
