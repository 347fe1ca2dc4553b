//! HTTP client for the Folio API

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{AdminInfo, LoginRequest, LoginResponse, MenuItem, PublicMenuItem};
use shared::request::{ReorderRequest, ReorderResult, SyncReport};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::reorder::MenuApi;

/// Wire envelope: `{success, data}` or `{success, error, message}`
#[derive(serde::Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    message: Option<String>,
}

/// Decode an envelope body received with `status`
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ClientResult<T> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(status, "Undecodable response body: {e}");
        ClientError::Parse(e.to_string())
    })?;

    if !envelope.success {
        return Err(ClientError::Api {
            code: envelope.error.unwrap_or_else(|| "UNKNOWN".to_string()),
            message: envelope.message.unwrap_or_default(),
            status,
        });
    }

    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse("success response without data".into()))
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.config.base_url, path.trim_start_matches('/'));
        let mut req = self.client.request(method, &url);
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        decode_envelope(status, &text)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// Log in and keep the session token for later calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<AdminInfo> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .request(Method::POST, "api/admin/login", Some(&body))
            .await?;
        self.config.token = Some(response.token);
        Ok(response.admin)
    }

    /// Public menu (active items)
    pub async fn fetch_menu(&self) -> ClientResult<Vec<PublicMenuItem>> {
        self.get("api/navigation/menu").await
    }

    /// Mirror every section into the menu
    pub async fn sync_menu(&self) -> ClientResult<SyncReport> {
        self.request::<SyncReport, ()>(Method::POST, "api/admin/menu/sync", None)
            .await
    }
}

#[async_trait]
impl MenuApi for HttpClient {
    async fn fetch_all_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("api/navigation/menu/all").await
    }

    async fn reorder_menu(&self, request: &ReorderRequest) -> ClientResult<ReorderResult> {
        self.request(Method::PATCH, "api/navigation/menu/reorder", Some(request))
            .await
    }
}
