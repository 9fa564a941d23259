// file: src/search/mod.rs
// description: search backend abstraction and the Yandex XML client
// reference: internal module structure

mod client;

pub use client::YandexClient;

use crate::error::Result;
use crate::models::SearchResult;
use async_trait::async_trait;

/// Anything that can answer a query with a raw response document.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResult>;
}
