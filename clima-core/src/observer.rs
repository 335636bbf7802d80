//! Callback-style delivery of lookup outcomes.
//!
//! [`spawn_fetch`] runs a lookup on the tokio runtime and hands the outcome to
//! an explicitly supplied [`WeatherObserver`]. Each spawned lookup calls
//! exactly one of the observer's methods, exactly once, from inside the
//! spawned task and never from the caller's stack. Observers that update
//! state owned by another context must hop back to it themselves.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::{WeatherError, WeatherModel, WeatherProvider, WeatherQuery};

pub trait WeatherObserver: Send + Sync {
    fn on_success(&self, model: WeatherModel);
    fn on_failure(&self, error: WeatherError);
}

/// Start a lookup for `query` and report its outcome to `observer`.
///
/// Must be called from within a tokio runtime. Overlapping calls are fully
/// independent; there is no queueing, deduplication or cancellation.
pub fn spawn_fetch(
    provider: Arc<dyn WeatherProvider>,
    query: WeatherQuery,
    observer: Arc<dyn WeatherObserver>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = provider.get_weather(&query).await;
        deliver(outcome, observer.as_ref());
    })
}

fn deliver(outcome: Result<WeatherModel, WeatherError>, observer: &dyn WeatherObserver) {
    match outcome {
        Ok(model) => observer.on_success(model),
        Err(error) => {
            debug!(kind = ?error.kind(), "Weather lookup failed");
            observer.on_failure(error)
        }
    }
}
