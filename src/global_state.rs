use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{Dashboard, RefreshScheduler},
    event_utils::WindowEventListenerHandle,
    infrastructure::{dom::DomDisplay, http::HttpSnapshotFetcher, rendering::EChartsRenderer},
};

/// Dashboard wired to the page: HTTP snapshots, DOM slots, ECharts
pub type LiveDashboard = Dashboard<HttpSnapshotFetcher, DomDisplay, EChartsRenderer>;

/// Everything owned by a started dashboard
pub struct RunningDashboard {
    pub dashboard: Rc<LiveDashboard>,
    pub scheduler: RefreshScheduler,
    pub resize_listener: Option<WindowEventListenerHandle>,
}

impl RunningDashboard {
    /// Stop the timer and detach the resize listener
    pub fn shutdown(mut self) {
        self.scheduler.stop();
        if let Some(listener) = self.resize_listener.take() {
            listener.remove();
        }
    }
}

thread_local! {
    static RUNNING: RefCell<Option<RunningDashboard>> = const { RefCell::new(None) };
}

/// Store `running`, shutting down any dashboard started before it
pub fn install(running: RunningDashboard) {
    let previous = RUNNING.with(|slot| slot.borrow_mut().replace(running));
    if let Some(previous) = previous {
        previous.shutdown();
    }
}

/// Remove and return the running dashboard
pub fn take() -> Option<RunningDashboard> {
    RUNNING.with(|slot| slot.borrow_mut().take())
}

/// Shared handle on the running dashboard, if any
pub fn dashboard() -> Option<Rc<LiveDashboard>> {
    RUNNING.with(|slot| slot.borrow().as_ref().map(|running| Rc::clone(&running.dashboard)))
}

pub fn is_running() -> bool {
    RUNNING.with(|slot| slot.borrow().is_some())
}
