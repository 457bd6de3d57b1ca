use async_trait::async_trait;
use ferrous_backend_application::ports::SuffixListFetcher;
use ferrous_backend_domain::DomainError;
use std::time::Duration;
use tracing::{info, instrument};

pub struct HttpSuffixListFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpSuffixListFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("Ferrous-Backend/1.0 (suffix-sync)")
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::SuffixListFetchError(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SuffixListFetcher for HttpSuffixListFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<String, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                DomainError::SuffixListFetchError(format!("fetch error for {}: {}", self.url, e))
            })?;

        if !response.status().is_success() {
            return Err(DomainError::SuffixListFetchError(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.url
            )));
        }

        let body = response.text().await.map_err(|e| {
            DomainError::SuffixListFetchError(format!("read error for {}: {}", self.url, e))
        })?;

        info!(bytes = body.len(), "Public suffix list fetched");
        Ok(body)
    }
}
