//! [`Query`] definition.

pub mod cities;
pub mod city;
pub mod initial_view;
pub mod listings;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{directory, CityDirectory},
    Service,
};

#[doc(inline)]
pub use self::initial_view::{ResolveInitialView, TryResolveInitialView};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`CityDirectory`] or a
/// [`ListingDirectory`].
///
/// [`ListingDirectory`]: crate::infra::ListingDirectory
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct DirectoryQuery<T>(T);

impl<W, B> DirectoryQuery<By<W, B>> {
    /// Creates a new [`DirectoryQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

// `CityDirectory` and `ListingDirectory` are the same `Handler` trait, so a
// single impl serves both.
impl<Loc, Geo, Dir, W, B> Query<DirectoryQuery<By<W, B>>>
    for Service<Loc, Geo, Dir>
where
    Dir: CityDirectory<
        Select<By<W, B>>,
        Ok = W,
        Err = Traced<directory::Error>,
    >,
{
    type Ok = W;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        DirectoryQuery(by): DirectoryQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.directory()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}
