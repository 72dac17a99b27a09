//! [`Query`] collection related to a single [`City`].

use common::operations::By;

use crate::domain::{city, City};
#[cfg(doc)]
use crate::{infra::directory, Query};

use super::DirectoryQuery;

/// Fetches exactly one [`City`] by its [`city::Locator`].
///
/// Fails with [`directory::Error::NotFound`] unless a single [`City`]
/// matches.
pub type ByLocator = DirectoryQuery<By<City, city::Locator>>;
