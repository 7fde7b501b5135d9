//! HTTP client for the travel assistant API.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::catalog::DestinationRecord;
use crate::http::handlers::{HealthStatus, RootMessage};
use crate::query::{SearchResponse, TravelQuery};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("destination not found")]
    NotFound,

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Typed client over the public endpoints.
#[derive(Debug, Clone)]
pub struct TravelClient {
    client: Client,
    base_url: Url,
}

impl TravelClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, ...).
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub async fn root(&self) -> Result<RootMessage, ClientError> {
        let res = self.client.get(self.url(&[])?).send().await?;
        decode(res).await
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let res = self.client.get(self.url(&["health"])?).send().await?;
        decode(res).await
    }

    pub async fn list_recommendations(&self) -> Result<Vec<DestinationRecord>, ClientError> {
        let res = self.client.get(self.url(&["recommendations"])?).send().await?;
        decode(res).await
    }

    /// Look up a destination by name fragment. The fragment is sent as a
    /// single percent-encoded path segment.
    pub async fn get_recommendation(
        &self,
        destination: &str,
    ) -> Result<DestinationRecord, ClientError> {
        let res = self
            .client
            .get(self.url(&["recommendations", destination])?)
            .send()
            .await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        decode(res).await
    }

    pub async fn search(&self, query: &TravelQuery) -> Result<SearchResponse, ClientError> {
        let res = self
            .client
            .post(self.url(&["search"])?)
            .json(query)
            .send()
            .await?;
        decode(res).await
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(res.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = TravelClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.url(&[]).unwrap().as_str(), "http://localhost:8000/");
        assert_eq!(
            client.url(&["health"]).unwrap().as_str(),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn test_url_encodes_destination_segment() {
        let client = TravelClient::new("http://localhost:8000/").unwrap();
        let url = client.url(&["recommendations", "Paris, France/x"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/recommendations/Paris,%20France%2Fx"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = TravelClient::new("http://gateway.local/travel/").unwrap();
        assert_eq!(
            client.url(&["search"]).unwrap().as_str(),
            "http://gateway.local/travel/search"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            TravelClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        let client = TravelClient::new("mailto:someone@example.com").unwrap();
        assert!(client.url(&["health"]).is_err());
    }
}
