//! City and listing directory implementations.

#[cfg(feature = "http")]
mod backend;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
use crate::infra::http;

#[cfg(feature = "http")]
pub use self::backend::Backend;

/// Directory of [`City`]s.
///
/// [`City`]: crate::domain::City
pub use common::Handler as CityDirectory;

/// Directory of [`Listing`]s.
///
/// [`Listing`]: crate::domain::Listing
pub use common::Handler as ListingDirectory;

/// Directory error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Directory is unreachable or replied with garbage.
    #[cfg(feature = "http")]
    #[display("directory transport failed: {_0}")]
    Transport(http::Error),

    /// No single entry matches the lookup.
    #[display("expected exactly one match, found {matches}")]
    #[from(ignore)]
    NotFound {
        /// Number of the entries matched: `0` or more than `1`.
        matches: usize,
    },
}

impl Error {
    /// Indicates whether this [`Error`] is [`Error::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
