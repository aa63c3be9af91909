use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Product, error::ErrorPayload};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog responded with status {status}: {}", .payload.message())]
    Status { status: u16, payload: ErrorPayload },
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// What the view state records. Transport and decode failures carry no
    /// server body, so they fall back to the generic payload.
    pub fn payload(&self) -> ErrorPayload {
        match self {
            Self::Status { payload, .. } => payload.clone(),
            Self::Transport(_) | Self::Decode(_) => ErrorPayload::Generic,
        }
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError>;
}

pub struct HttpCatalogClient {
    http: Client,
    catalog_url: String,
}

impl HttpCatalogClient {
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), catalog_url)
    }

    pub fn with_client(http: Client, catalog_url: impl Into<String>) -> Self {
        Self {
            http,
            catalog_url: catalog_url.into(),
        }
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        let res = self
            .http
            .get(&self.catalog_url)
            .send()
            .await
            .map_err(|err| {
                warn!(url = %self.catalog_url, error = %err, "catalog request failed");
                FetchError::Transport(err)
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let payload = ErrorPayload::from_body(&body);
            warn!(
                url = %self.catalog_url,
                status = status.as_u16(),
                message = %payload.message(),
                "catalog responded with an error"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                payload,
            });
        }

        let products: Vec<Product> = res.json().await.map_err(FetchError::Decode)?;
        debug!(count = products.len(), "decoded catalog");
        Ok(products)
    }
}
