//! Blocking HTTP client for the catalog server.
//!
//! The `CatalogService` trait is the seam the player depends on; the
//! network-facing implementation lives here. Requests carry a bearer token
//! when one is configured, and non-2xx responses are mapped to
//! `CatalogError::Api` using the server's `{ "message": ... }` body.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::CatalogSettings;

use super::model::{FavoriteToggle, Track};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("catalog error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// The catalog operations the playback core consumes.
///
/// `Send + Sync` so one instance can be shared with the play recorder's
/// worker thread.
pub trait CatalogService: Send + Sync {
    /// Fetch the full ordered track list.
    fn fetch_track_list(&self) -> Result<Vec<Track>, CatalogError>;
    /// Record one play of `track_id`. Best-effort telemetry.
    fn record_play(&self, track_id: u64) -> Result<(), CatalogError>;
    /// Flip the favorite flag of `track_id` and return the confirmed state.
    fn toggle_favorite(&self, track_id: u64) -> Result<FavoriteToggle, CatalogError>;
}

/// `CatalogService` over the catalog server's REST surface.
pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalog {
    pub fn new(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("vivace/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        join_endpoint(&self.base_url, path)
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-2xx response to `CatalogError::Api`.
    fn check(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        #[derive(Deserialize)]
        struct ApiMessage {
            message: String,
        }

        let message = response
            .json::<ApiMessage>()
            .map(|m| m.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(CatalogError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl CatalogService for HttpCatalog {
    fn fetch_track_list(&self) -> Result<Vec<Track>, CatalogError> {
        let response = self.authorize(self.client.get(self.endpoint("songs"))).send()?;
        Ok(Self::check(response)?.json::<Vec<Track>>()?)
    }

    fn record_play(&self, track_id: u64) -> Result<(), CatalogError> {
        let url = self.endpoint(&format!("songs/{track_id}/play"));
        let response = self.authorize(self.client.post(url)).send()?;
        Self::check(response)?;
        Ok(())
    }

    fn toggle_favorite(&self, track_id: u64) -> Result<FavoriteToggle, CatalogError> {
        let response = self
            .authorize(self.client.post(self.endpoint("favorites/toggle")))
            .json(&serde_json::json!({ "songId": track_id }))
            .send()?;
        Ok(Self::check(response)?.json::<FavoriteToggle>()?)
    }
}

/// Join a base URL and a path without doubling or dropping the slash.
pub(crate) fn join_endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
