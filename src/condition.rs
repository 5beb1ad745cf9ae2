/// The verdict of a [`Condition`] on a successful attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Discard the result and run the action again.
    Retry,
    /// Accept the result.
    Stop,
    /// No opinion; the result is accepted.
    Undecided,
}

impl Continuation {
    pub fn is_retry(self) -> bool {
        self == Continuation::Retry
    }
}

impl From<bool> for Continuation {
    fn from(retry: bool) -> Continuation {
        if retry {
            Continuation::Retry
        } else {
            Continuation::Stop
        }
    }
}

impl From<Option<bool>> for Continuation {
    fn from(retry: Option<bool>) -> Continuation {
        retry.map_or(Continuation::Undecided, Continuation::from)
    }
}

/// Specifies whether a successful attempt should nonetheless be retried.
///
/// Only consulted after an attempt that did not fail.
pub trait Condition {
    fn should_continue(&mut self) -> Continuation;
}

impl<C: Into<Continuation>, F: FnMut() -> C> Condition for F {
    fn should_continue(&mut self) -> Continuation {
        self().into()
    }
}

/// A condition without an opinion, accepting every success.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCondition;

impl Condition for NoCondition {
    fn should_continue(&mut self) -> Continuation {
        Continuation::Undecided
    }
}
