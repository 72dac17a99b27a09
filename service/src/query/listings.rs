//! [`Query`] collection related to multiple [`Listing`]s.

use common::operations::By;

use crate::domain::{city, Listing};
#[cfg(doc)]
use crate::{domain::City, Query};

use super::DirectoryQuery;

/// Fetches the most recent [`Listing`]s of the [`City`] with the provided
/// [`city::Id`].
pub type MostRecent = DirectoryQuery<By<Vec<Listing>, city::Id>>;
