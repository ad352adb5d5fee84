use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::core::LogSink;
use crate::utils::error::{Result, ValueError};

/// Returns a future that resolves to `value`, unchanged.
pub async fn resolved_wrapper<T>(value: T) -> Result<T> {
    Ok(value)
}

/// Returns a future that rejects with a `ValueError` carrying exactly
/// `message`.
pub async fn rejected_wrapper<T>(message: &str) -> Result<T> {
    Err(ValueError::new(message))
}

/// Suspends for approximately `ms` milliseconds on the runtime timer, then
/// resolves with no value. Fire-and-forget single timer, no cancellation.
pub async fn pause_for_ms(ms: u64) {
    pause_for(Duration::from_millis(ms)).await;
}

pub async fn pause_for(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Attaches logging side effects to future settlement, emitting through the
/// sink it was constructed with.
pub struct PromiseHandler<L: LogSink> {
    sink: L,
}

impl<L: LogSink> PromiseHandler<L> {
    pub fn new(sink: L) -> Self {
        Self { sink }
    }

    /// Awaits `promise`; on resolution logs the value once and passes it
    /// through. Rejections propagate untouched, nothing is logged for them.
    pub async fn handle_resolved_promise<T, F>(&self, promise: F) -> Result<T>
    where
        T: Display,
        F: Future<Output = Result<T>>,
    {
        let value = promise.await?;
        self.sink.log_value(&value.to_string());
        Ok(value)
    }

    /// Awaits `promise` and absorbs any rejection: resolutions are logged and
    /// passed through as `Some`, rejections are logged to the error channel
    /// and collapse to `None`. The returned future cannot fail.
    pub async fn handle_resolved_or_rejected_promise<T, F>(&self, promise: F) -> Option<T>
    where
        T: Display,
        F: Future<Output = Result<T>>,
    {
        match promise.await {
            Ok(value) => {
                self.sink.log_value(&value.to_string());
                Some(value)
            }
            Err(err) => {
                tracing::debug!("absorbing rejection: {}", err.message());
                self.sink
                    .log_error(&format!("Your error message was: {}", err.message()));
                None
            }
        }
    }
}
