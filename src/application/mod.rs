pub mod chart_adapter;
pub mod config;
pub mod dashboard;
pub mod scheduler;

pub use chart_adapter::ChartAdapter;
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, RefreshState, RefreshStats, TickOutcome};
pub use scheduler::{RefreshScheduler, run_refresh_loop};
