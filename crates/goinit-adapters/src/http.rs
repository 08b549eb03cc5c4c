//! HTTP adapter for the generator service.
//!
//! Talks JSON to the service's `/api` endpoints using `reqwest`. Transport
//! failures map to [`ApplicationError::Network`]; non-2xx statuses map to
//! [`ApplicationError::Server`] with the plain-text body the service puts
//! in error responses.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use goinit_core::application::error::ApplicationError;
use goinit_core::application::ports::{
    GenerateRequest, GeneratorApi, PreviewRequest, TemplateCatalog,
};
use goinit_core::domain::compatibility::ProjectMetadata;
use goinit_core::domain::preview::{PreviewResult, PreviewStats};
use goinit_core::domain::value_objects::{Framework, ProjectType};

/// Production client for the generator service.
#[derive(Debug, Clone)]
pub struct HttpGeneratorClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGeneratorClient {
    /// Build a client against `base_url` (e.g. `http://localhost:8181/api`)
    /// with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApplicationError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(network_error)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Turn a non-2xx response into `Server`, passing 2xx through.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApplicationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(ApplicationError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl GeneratorApi for HttpGeneratorClient {
    async fn fetch_metadata(&self) -> Result<ProjectMetadata, ApplicationError> {
        let url = self.url("meta");
        debug!(%url, "fetching metadata");
        let response = self.http.get(&url).send().await.map_err(network_error)?;
        Self::check(response)
            .await?
            .json::<ProjectMetadata>()
            .await
            .map_err(network_error)
    }

    async fn preview(&self, request: &PreviewRequest) -> Result<PreviewResult, ApplicationError> {
        let url = self.url("preview");
        debug!(%url, "requesting preview");
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(network_error)?;
        Self::check(response)
            .await?
            .json::<PreviewResult>()
            .await
            .map_err(network_error)
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<u8>, ApplicationError> {
        let url = self.url("generate");
        debug!(%url, "requesting archive");
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(network_error)?;
        let bytes = Self::check(response)
            .await?
            .bytes()
            .await
            .map_err(network_error)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TemplateCatalog for HttpGeneratorClient {
    async fn fetch_catalog(&self) -> Result<ProjectMetadata, ApplicationError> {
        let url = self.url("templates");
        debug!(%url, "fetching template catalog");
        let response = self.http.get(&url).send().await.map_err(network_error)?;
        Self::check(response)
            .await?
            .json::<ProjectMetadata>()
            .await
            .map_err(network_error)
    }

    async fn fetch_stats(
        &self,
        project_type: ProjectType,
        framework: Framework,
    ) -> Result<PreviewStats, ApplicationError> {
        let url = self.url("templates/stats");
        debug!(%url, %project_type, %framework, "fetching template stats");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("projectType", project_type.as_str()),
                ("framework", framework.as_str()),
            ])
            .send()
            .await
            .map_err(network_error)?;
        Self::check(response)
            .await?
            .json::<PreviewStats>()
            .await
            .map_err(network_error)
    }
}

fn network_error(e: reqwest::Error) -> ApplicationError {
    ApplicationError::Network {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client =
            HttpGeneratorClient::new("http://localhost:8181/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("meta"), "http://localhost:8181/api/meta");
        assert_eq!(
            client.url("templates/stats"),
            "http://localhost:8181/api/templates/stats"
        );
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_network_error() {
        // Port 9 (discard) is not running an HTTP server.
        let client =
            HttpGeneratorClient::new("http://127.0.0.1:9/api", Duration::from_millis(200)).unwrap();
        let err = client.fetch_metadata().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Network { .. }));
    }
}
