use std::time::{Duration, Instant};

use retry_runner::RetryRunner;

pub fn main() {
    let mut last_instant = Instant::now();

    let retry_result = RetryRunner::new()
        .max_retries(3)
        .delay(Duration::from_millis(10))
        .between_attempts(|attempt: usize| println!("Attempt {} failed", attempt))
        .run(move || {
            let this_instant = Instant::now();

            let duration = this_instant.duration_since(last_instant);
            last_instant = this_instant;

            println!("Actual {:?}", duration);
            Err::<(), ()>(())
        });

    assert!(retry_result.is_err());
}
