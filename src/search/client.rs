// file: src/search/client.rs
// description: HTTP client for the Yandex XML search API
// reference: https://yandex.com/dev/xml/doc/dg/concepts/get-request.html

use crate::config::{Credentials, SearchConfig};
use crate::error::{PipelineError, Result};
use crate::models::SearchResult;
use crate::search::SearchBackend;
use crate::utils::Validator;
use async_trait::async_trait;
use reqwest::{Client, Request};
use std::time::Duration;
use tracing::debug;

const ERROR_BODY_LIMIT: usize = 200;

pub struct YandexClient {
    client: Client,
    endpoint: String,
    l10n: String,
    credentials: Credentials,
}

impl YandexClient {
    pub fn new(credentials: Credentials, search: &SearchConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(search.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(ip) = search.client_ip {
            debug!("Binding search requests to local address {}", ip);
            builder = builder.local_address(ip);
        }

        let client = builder
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: search.endpoint().to_string(),
            l10n: search.l10n.clone(),
            credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, query: &str) -> Result<Request> {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("l10n", self.l10n.as_str()),
                ("user", self.credentials.user.as_str()),
                ("key", self.credentials.key.as_str()),
                ("text", query),
            ])
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl SearchBackend for YandexClient {
    async fn search(&self, query: &str) -> Result<SearchResult> {
        let request = self.build_request(query)?;

        debug!("Querying {} for {:?}", self.endpoint, query);

        let response = self.client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::HttpStatus {
                status: status.as_u16(),
                body: Validator::truncate_text(body.trim(), ERROR_BODY_LIMIT),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes", body.len());

        Ok(SearchResult::new(body))
    }
}
