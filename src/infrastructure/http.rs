use gloo_net::http::Request;

use crate::domain::{
    errors::{DashboardError, FetchError},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::Snapshot,
};

/// Where refresh cycles get their snapshot from
#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    /// One attempt, no retry. Fails with `Fetch` or `Decode`; a partial
    /// snapshot is never returned.
    async fn fetch(&self) -> Result<Snapshot, DashboardError>;
}

/// Fetches the snapshot document over HTTP
#[derive(Debug, Clone)]
pub struct HttpSnapshotFetcher {
    url: String,
}

impl HttpSnapshotFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SnapshotSource for HttpSnapshotFetcher {
    async fn fetch(&self) -> Result<Snapshot, DashboardError> {
        get_logger().debug(
            LogComponent::Infrastructure("SnapshotFetcher"),
            &format!("📡 Fetching snapshot from {}", self.url),
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("{e:?}")))?;

        if !response.ok() {
            return Err(FetchError::Status {
                code: response.status(),
                text: response.status_text(),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| FetchError::Body(format!("{e:?}")))?;
        let snapshot = Snapshot::from_json(&body).map_err(|error| {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("SnapshotFetcher"),
                &format!("payload rejected: {error}"),
                &format!("{{\"url\":\"{}\",\"bytes\":{}}}", self.url, body.len()),
            );
            error
        })?;

        get_logger().debug(
            LogComponent::Infrastructure("SnapshotFetcher"),
            &format!(
                "✅ Snapshot {}: {} hourly, {} daily, {} reference points",
                snapshot.last_update,
                snapshot.hourly_data.len(),
                snapshot.daily_data.len(),
                snapshot.yesterday_hourly_data.len()
            ),
        );

        Ok(snapshot)
    }
}
