use futures::TryFutureExt;
use tracing::trace;

use super::action::AsyncAction;
use super::condition::Condition;
use super::hook::Hook;
use super::runner::{RetryRunner, Step};

impl<C: Condition, H: Hook> RetryRunner<C, H> {
    /// Drives `action` through the same attempts as [`run`](RetryRunner::run),
    /// awaiting each future in turn.
    ///
    /// The configured delay is slept with `tokio::time::sleep` rather than by
    /// blocking the thread. Attempts never overlap.
    pub async fn run_async<A: AsyncAction>(&mut self, mut action: A) -> Result<A::Item, A::Error> {
        let mut attempt = 1;
        loop {
            trace!(attempt, "running attempt");
            let outcome = action.run().into_future().await;
            match self.step(attempt, outcome) {
                Step::Done(result) => return result,
                Step::Retry => {
                    self.hook_mut().between_attempts(attempt);
                    if let Some(delay) = self.delay_between() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

/// Runs `action` asynchronously with the default runner.
pub async fn retry_async<A: AsyncAction>(action: A) -> Result<A::Item, A::Error> {
    RetryRunner::new().run_async(action).await
}
