//! Backend API Client
//!
//! A JSON-over-HTTP client for the trading-signal backend. Payloads are
//! validated here, at the network boundary, into typed records.

use crate::api::SignalApi;
use crate::api::error::ApiError;
use crate::consts::dashboard_consts::http;
use crate::environment::Environment;
use crate::models::calendar::CalendarResponse;
use crate::models::decode::decode_entries;
use crate::models::symbols::SymbolsResponse;
use crate::models::{CalendarEvent, Decoded, Signal, Stats};
use reqwest::{Client, ClientBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("signal-dashboard/", env!("CARGO_PKG_VERSION"));

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    /// Queries the backend's liveness endpoint.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get_json("health").await
    }
}

#[async_trait::async_trait]
impl SignalApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_signals(&self, limit: u32) -> Result<Decoded<Signal>, ApiError> {
        let entries: Vec<serde_json::Value> =
            self.get_json(&format!("signals?limit={}", limit)).await?;
        Ok(decode_entries(entries))
    }

    async fn get_stats(&self) -> Result<Stats, ApiError> {
        self.get_json("api/stats").await
    }

    async fn get_symbols(&self) -> Result<Decoded<String>, ApiError> {
        let response: SymbolsResponse = self.get_json("api/symbols").await?;
        Ok(response.into_symbols())
    }

    async fn get_calendar(&self) -> Result<Decoded<CalendarEvent>, ApiError> {
        let response: CalendarResponse = self.get_json("api/calendar").await?;
        Ok(decode_entries(response.events))
    }
}
