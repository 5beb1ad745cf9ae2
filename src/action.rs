#[cfg(feature = "tokio")]
use futures::TryFuture;

/// An action can be run multiple times and produces a result.
pub trait Action {
    /// The item that a successful run produces.
    type Item;
    /// The error that a failed run produces.
    type Error;

    fn run(&mut self) -> Result<Self::Item, Self::Error>;
}

impl<T, E, F: FnMut() -> Result<T, E>> Action for F {
    type Item = T;
    type Error = E;

    fn run(&mut self) -> Result<T, E> {
        self()
    }
}

/// An action that can be run multiple times and produces a future.
#[cfg(feature = "tokio")]
pub trait AsyncAction {
    /// The future that this action produces.
    type Future: TryFuture<Ok = Self::Item, Error = Self::Error>;
    /// The item that the future may resolve with.
    type Item;
    /// The error that the future may resolve with.
    type Error;

    fn run(&mut self) -> Self::Future;
}

#[cfg(feature = "tokio")]
impl<T: TryFuture, F: FnMut() -> T> AsyncAction for F {
    type Item = T::Ok;
    type Error = T::Error;
    type Future = T;

    fn run(&mut self) -> Self::Future {
        self()
    }
}
