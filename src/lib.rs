//! This library runs an operation and runs it again when it fails, up to a
//! bounded number of attempts, before handing the last error back to the
//! caller untouched. A condition can additionally ask for another attempt
//! after a success, and a hook or fixed delay can run between attempts.
//!
//! # Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! retry-runner = "*"
//! ```
//!
//! By default, `retry-runner` also provides an asynchronous runner built on
//! [`tokio`](https://tokio.rs/) timers. It can be disabled via cargo feature flags:
//!
//! ```toml
//! [dependencies.retry-runner]
//! version = "*"
//! default-features = false
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use retry_runner::RetryRunner;
//!
//! let mut calls = 0;
//! let result = RetryRunner::new()
//!     .max_retries(3)
//!     .delay(Duration::from_millis(1))
//!     .run(|| {
//!         calls += 1;
//!         if calls < 3 { Err("not yet") } else { Ok(calls) }
//!     });
//!
//! assert_eq!(result, Ok(3));
//! ```
//!
//! Retrying after a success until the result is acceptable:
//!
//! ```rust
//! use std::cell::Cell;
//! use retry_runner::RetryRunner;
//!
//! let executions = Cell::new(0);
//! let result = RetryRunner::new()
//!     .retry_while(|| executions.get() != 3)
//!     .run(|| {
//!         executions.set(executions.get() + 1);
//!         Ok::<_, ()>(executions.get())
//!     });
//!
//! assert_eq!(result, Ok(3));
//! ```

mod action;
mod condition;
#[cfg(feature = "tokio")]
mod future;
mod hook;
mod runner;

#[cfg(feature = "tokio")]
pub use action::AsyncAction;
pub use action::Action;
pub use condition::{Condition, Continuation, NoCondition};
#[cfg(feature = "tokio")]
pub use future::retry_async;
pub use hook::{Hook, NoHook};
pub use runner::{retry, retry_with_delay, RetryRunner, DEFAULT_MAX_RETRIES};
