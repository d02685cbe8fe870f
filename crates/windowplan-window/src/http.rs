use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use windowplan_core::config::WindowServiceConfig;
use windowplan_core::MaintenanceWindow;

use crate::error::WindowError;
use crate::lookup::{ensure_usable, MaintenanceWindowLookup};

/// Locator answer: where the named service currently lives.
#[derive(Debug, Deserialize)]
struct ServiceLocation {
    #[serde(alias = "Location")]
    location: String,
}

/// Resolves the maintenance window service through a service locator, then
/// asks it for the planned window. Two GETs per lookup, no caching.
pub struct HttpWindowLookup {
    client: reqwest::Client,
    locator_base_url: String,
    service_name: String,
    planned_path: String,
}

impl HttpWindowLookup {
    pub fn new(config: &WindowServiceConfig) -> Result<Self, WindowError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            locator_base_url: config.locator_base_url.clone(),
            service_name: config.service_name.clone(),
            planned_path: config.planned_path.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WindowError> {
        debug!(%url, "GET");
        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                WindowError::Unavailable(format!("{url}: {e}"))
            } else {
                WindowError::Http(e)
            }
        })?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(status, %url, body = %text, "window service error");
            return Err(WindowError::Api {
                status,
                message: text,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| WindowError::Parse(format!("{url}: {e}")))
    }
}

#[async_trait]
impl MaintenanceWindowLookup for HttpWindowLookup {
    fn name(&self) -> &str {
        "http"
    }

    async fn planned_window(&self) -> Result<MaintenanceWindow, WindowError> {
        let locator_url = join_url(&self.locator_base_url, &self.service_name);
        let location: ServiceLocation = self.get_json(&locator_url).await?;

        let window_url = join_url(&location.location, &self.planned_path);
        let window: MaintenanceWindow = self.get_json(&window_url).await?;
        debug!(length_in_hours = window.length_in_hours, "planned window fetched");
        ensure_usable(window)
    }
}

/// Join `base` and `path` with exactly one slash between them.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
