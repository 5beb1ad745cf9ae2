use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use super::action::Action;
use super::condition::{Condition, NoCondition};
use super::hook::{Hook, NoHook};

/// Number of attempts allowed on a failing path unless configured otherwise.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// What happens after an attempt has been evaluated.
pub(crate) enum Step<T, E> {
    /// The outcome is final and goes back to the caller.
    Done(Result<T, E>),
    /// Run the hook and attempt again.
    Retry,
}

/// Runs an action, running it again after a failure or after a success
/// that the configured condition rejects.
///
/// A failure on attempt `n` is final once `n` reaches `max_retries`, so with
/// the default of `3` a failing action runs at most three times. A
/// `max_retries` of `0` runs the action exactly once. Retries requested by
/// the condition are not counted against that budget, but they do advance
/// the attempt number.
///
/// The runner keeps no state between calls to [`run`](RetryRunner::run).
#[derive(Debug, Clone)]
pub struct RetryRunner<C = NoCondition, H = NoHook> {
    max_retries: usize,
    condition: C,
    hook: H,
    delay: Option<Duration>,
}

impl RetryRunner {
    pub fn new() -> RetryRunner {
        RetryRunner {
            max_retries: DEFAULT_MAX_RETRIES,
            condition: NoCondition,
            hook: NoHook,
            delay: None,
        }
    }
}

impl Default for RetryRunner {
    fn default() -> RetryRunner {
        RetryRunner::new()
    }
}

impl<C: Condition, H: Hook> RetryRunner<C, H> {
    /// Sets the attempt number at which a failure becomes final.
    ///
    /// `0` disables retrying after a failure altogether.
    pub fn max_retries(mut self, max_retries: usize) -> RetryRunner<C, H> {
        self.max_retries = max_retries;
        self
    }

    /// Consults `condition` after every successful attempt.
    ///
    /// Accepts anything callable that returns a `bool`, an `Option<bool>` or a
    /// [`Continuation`](crate::Continuation). Nothing bounds the number of
    /// retries it requests: a condition that keeps answering `true` for an
    /// action that keeps succeeding loops forever.
    pub fn retry_while<N: Condition>(self, condition: N) -> RetryRunner<N, H> {
        RetryRunner {
            max_retries: self.max_retries,
            condition,
            hook: self.hook,
            delay: self.delay,
        }
    }

    /// Calls `hook` with the number of the attempt that just completed,
    /// right before each retry.
    pub fn between_attempts<N: Hook>(self, hook: N) -> RetryRunner<C, N> {
        RetryRunner {
            max_retries: self.max_retries,
            condition: self.condition,
            hook,
            delay: self.delay,
        }
    }

    /// Waits a fixed `delay` before each retry, after the hook has run.
    pub fn delay(mut self, delay: Duration) -> RetryRunner<C, H> {
        self.delay = Some(delay);
        self
    }

    /// Runs `action` until it produces an accepted result or runs out of
    /// attempts, blocking the calling thread for any configured delay.
    ///
    /// On exhaustion the error of the last attempt is returned as is.
    pub fn run<A: Action>(&mut self, mut action: A) -> Result<A::Item, A::Error> {
        let mut attempt = 1;
        loop {
            trace!(attempt, "running attempt");
            match self.step(attempt, action.run()) {
                Step::Done(result) => return result,
                Step::Retry => {
                    self.hook.between_attempts(attempt);
                    if let Some(delay) = self.delay {
                        thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }

    pub(crate) fn step<T, E>(&mut self, attempt: usize, outcome: Result<T, E>) -> Step<T, E> {
        match outcome {
            Ok(item) => {
                if self.condition.should_continue().is_retry() {
                    debug!(attempt, "condition rejected result, retrying");
                    Step::Retry
                } else {
                    Step::Done(Ok(item))
                }
            }
            Err(err) => {
                if self.max_retries == 0 || attempt >= self.max_retries {
                    debug!(attempt, max_retries = self.max_retries, "attempts exhausted");
                    Step::Done(Err(err))
                } else {
                    debug!(attempt, max_retries = self.max_retries, "attempt failed, retrying");
                    Step::Retry
                }
            }
        }
    }

    #[cfg(feature = "tokio")]
    pub(crate) fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    #[cfg(feature = "tokio")]
    pub(crate) fn delay_between(&self) -> Option<Duration> {
        self.delay
    }
}

/// Runs `action` with the default runner: up to three attempts on failure,
/// no condition, no delay.
pub fn retry<A: Action>(action: A) -> Result<A::Item, A::Error> {
    RetryRunner::new().run(action)
}

/// Like [`retry`], blocking the thread for `delay` before each retry.
pub fn retry_with_delay<A: Action>(action: A, delay: Duration) -> Result<A::Item, A::Error> {
    RetryRunner::new().delay(delay).run(action)
}
