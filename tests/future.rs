#![cfg(feature = "tokio")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future;
use retry_runner::{retry_async, RetryRunner};

#[tokio::test]
async fn attempts_just_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let cloned_counter = counter.clone();
    let res = RetryRunner::new()
        .max_retries(0)
        .run_async(move || {
            cloned_counter.fetch_add(1, Ordering::SeqCst);
            future::err::<(), u64>(42)
        })
        .await;

    assert_eq!(res, Err(42));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn attempts_until_max_retries_exceeded() {
    let counter = Arc::new(AtomicUsize::new(0));
    let cloned_counter = counter.clone();
    let res = RetryRunner::new()
        .delay(Duration::from_millis(10))
        .run_async(move || {
            cloned_counter.fetch_add(1, Ordering::SeqCst);
            future::err::<(), u64>(42)
        })
        .await;

    assert_eq!(res, Err(42));
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn attempts_until_success() {
    let counter = Arc::new(AtomicUsize::new(0));
    let cloned_counter = counter.clone();
    let res = retry_async(move || {
        let previous = cloned_counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if previous < 2 {
                Err::<usize, u64>(42)
            } else {
                Ok::<usize, u64>(previous + 1)
            }
        }
    })
    .await;

    assert_eq!(res, Ok(3));
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn attempts_retry_while_condition_is_true() {
    let counter = Arc::new(AtomicUsize::new(0));
    let cloned_counter = counter.clone();
    let condition_counter = counter.clone();
    let res = RetryRunner::new()
        .retry_while(move || condition_counter.load(Ordering::SeqCst) < 5)
        .run_async(move || {
            let previous = cloned_counter.fetch_add(1, Ordering::SeqCst);
            future::ok::<usize, ()>(previous + 1)
        })
        .await;

    assert_eq!(res, Ok(5));
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn calls_hook_between_attempts() {
    let hooks = Arc::new(AtomicUsize::new(0));
    let cloned_hooks = hooks.clone();
    let res = RetryRunner::new()
        .max_retries(4)
        .between_attempts(move |attempt: usize| {
            assert_eq!(cloned_hooks.fetch_add(1, Ordering::SeqCst) + 1, attempt);
        })
        .run_async(|| future::err::<(), _>("down"))
        .await;

    assert_eq!(res, Err("down"));
    assert_eq!(hooks.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn sleeps_on_the_timer_between_attempts() {
    let start = tokio::time::Instant::now();
    let res = RetryRunner::new()
        .delay(Duration::from_secs(60))
        .run_async(|| future::err::<(), _>(()))
        .await;

    assert_eq!(res, Err(()));
    assert!(start.elapsed() >= Duration::from_secs(120));
}
