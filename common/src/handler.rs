//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous handler of a single operation kind.
///
/// Returned futures are not required to be [`Send`], so handlers may be
/// driven on a single-threaded runtime.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
