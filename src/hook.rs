/// Side effect run strictly between two attempts.
///
/// Receives the 1-based number of the attempt that just completed. Never
/// called before the first attempt or after the last one.
pub trait Hook {
    fn between_attempts(&mut self, attempt: usize);
}

impl<F: FnMut(usize)> Hook for F {
    fn between_attempts(&mut self, attempt: usize) {
        self(attempt)
    }
}

/// A hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHook;

impl Hook for NoHook {
    fn between_attempts(&mut self, _attempt: usize) {}
}

#[test]
fn closures_receive_attempt_numbers() {
    let mut seen = Vec::new();
    {
        let mut h = |attempt: usize| seen.push(attempt);
        h.between_attempts(1);
        h.between_attempts(2);
    }

    assert_eq!(seen, vec![1, 2]);
}
