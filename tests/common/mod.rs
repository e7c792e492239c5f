//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::future::Future;
use std::time::Duration;

use viewmodel_kit::{EventObserver, ViewModelEvent};

/// Upper bound for anything that should arrive promptly.
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(1);

/// How long to wait before concluding nothing else will arrive.
pub const QUIET_PERIOD: Duration = Duration::from_millis(50);

/// Await `fut`, panicking if it takes longer than [`DELIVERY_TIMEOUT`].
pub async fn within<F: Future>(fut: F) -> F::Output {
    tokio::time::timeout(DELIVERY_TIMEOUT, fut)
        .await
        .expect("timed out waiting for delivery")
}

/// Assert the observer receives no event during [`QUIET_PERIOD`].
/// A stream that ends because its emitter was dropped counts as quiet.
pub async fn assert_quiet<E: ViewModelEvent>(observer: &mut EventObserver<E>) {
    let got = tokio::time::timeout(QUIET_PERIOD, observer.recv()).await;
    if let Ok(Some(event)) = got {
        panic!("expected no event, got {event:?}");
    }
}

/// Assert the observer's stream has ended.
pub async fn assert_closed<E: ViewModelEvent>(observer: &mut EventObserver<E>) {
    let got = within(observer.recv()).await;
    assert!(got.is_none(), "expected closed stream, got {got:?}");
}
