use std::{future::Future, rc::Rc, time::Duration};

use futures::future::{AbortHandle, Abortable};
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::dashboard::{Dashboard, TickOutcome},
    domain::logging::{LogComponent, get_logger},
    infrastructure::{dom::DisplaySurface, http::SnapshotSource, rendering::ChartRenderer},
};

/// Drives the refresh cadence of a [`Dashboard`].
///
/// The first tick fires immediately; each following tick fires `interval`
/// after the previous one finished, whatever its outcome. Stopping (or
/// dropping) the scheduler aborts the pending timer.
pub struct RefreshScheduler {
    interval: Duration,
    abort: Option<AbortHandle>,
}

impl RefreshScheduler {
    pub fn start<S, D, R>(dashboard: Rc<Dashboard<S, D, R>>, interval: Duration) -> Self
    where
        S: SnapshotSource + 'static,
        D: DisplaySurface + 'static,
        R: ChartRenderer + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let refresh_loop = async move {
            run_refresh_loop(&*dashboard, interval, gloo_timers::future::sleep).await;
        };
        let task = Abortable::new(refresh_loop, registration);

        spawn_local(async move {
            if task.await.is_err() {
                get_logger().info(
                    LogComponent::Application("RefreshScheduler"),
                    "🛑 Refresh loop stopped",
                );
            }
        });

        get_logger().info(
            LogComponent::Application("RefreshScheduler"),
            &format!("⏱️ Refreshing every {}s", interval.as_secs_f64()),
        );

        Self { interval, abort: Some(handle) }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.abort.as_ref().is_some_and(|handle| !handle.is_aborted())
    }

    /// Release the timer. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Tick, wait `interval`, repeat. Returns only when the surrounding task is
/// aborted.
pub async fn run_refresh_loop<S, D, R, F, Fut>(
    dashboard: &Dashboard<S, D, R>,
    interval: Duration,
    mut sleep: F,
) where
    S: SnapshotSource,
    D: DisplaySurface,
    R: ChartRenderer,
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        if let TickOutcome::Failed(_) = dashboard.tick().await {
            get_logger().debug(
                LogComponent::Application("RefreshScheduler"),
                "keeping last good data until the next tick",
            );
        }
        sleep(interval).await;
    }
}
