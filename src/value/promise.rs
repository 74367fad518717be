//! Promise values backed by a shared settlement future.

use std::fmt;
use std::future::Future;

use futures::future::{BoxFuture, FutureExt, Shared};

use super::Value;

/// The outcome of a settled promise: a fulfillment value or a rejection
/// reason.
pub type Settlement = Result<Value, Value>;

/// The payload of a promise value.
///
/// The settlement future is stored behind [`Shared`], so one promise can
/// back any number of assertions: every call to [`PromiseData::settled`]
/// observes the same outcome, and the underlying future runs once.
pub struct PromiseData {
    settlement: Shared<BoxFuture<'static, Settlement>>,
}

impl PromiseData {
    pub(crate) fn new(future: impl Future<Output = Settlement> + Send + 'static) -> Self {
        Self {
            settlement: future.boxed().shared(),
        }
    }

    /// Wait for the promise to settle.
    ///
    /// May be awaited any number of times; later waiters get a clone of the
    /// first settlement.
    pub async fn settled(&self) -> Settlement {
        self.settlement.clone().await
    }
}

impl fmt::Debug for PromiseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromiseData").finish_non_exhaustive()
    }
}
