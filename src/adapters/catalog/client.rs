//! HTTP catalog client
//!
//! Production [`CatalogSource`] implementation over the catalog service's
//! JSON REST API using reqwest. Authentication is a one-time session login
//! performed during setup; the resulting token rides along on every
//! request, with Basic auth as the fallback when no session exists.
//!
//! The client performs no retries of its own. Retry policy belongs to the
//! export pipeline, which wraps individual fetches.

use super::models::SessionResponse;
use super::source::CatalogSource;
use crate::config::CatalogConfig;
use crate::domain::ids::{CollectionId, RecordId};
use crate::domain::{CatalogError, Collection, QuireError, Record, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, Response};
use secrecy::ExposeSecret;
use std::time::Duration;

/// HTTP implementation of [`CatalogSource`].
pub struct HttpCatalog {
    /// Base URL of the catalog API, without a trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Session token obtained by [`HttpCatalog::authenticate`]
    session_token: Option<String>,

    /// Catalog configuration
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            base_url,
            client,
            session_token: None,
            config,
        })
    }

    /// Log in to the catalog service and store the session token.
    ///
    /// Without configured credentials the client proceeds anonymously;
    /// whether that works is up to the service.
    pub async fn authenticate(&mut self) -> Result<()> {
        let (username, password) = match (&self.config.username, &self.config.password) {
            (Some(u), Some(p)) => (u.clone(), p.expose_secret().as_ref().to_string()),
            _ => {
                tracing::warn!("No catalog credentials configured, attempting anonymous access");
                return Ok(());
            }
        };

        let url = format!("{}/session", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::AuthenticationFailed(format!(
                "login failed with status {status}: {body}"
            ))
            .into());
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Catalog session established");
        self.session_token = Some(session.token);
        Ok(())
    }

    /// Check if the client holds a session token.
    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some()
    }

    /// Base URL of the catalog service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build authorization header value
    fn auth_header_value(&self) -> Option<String> {
        if let Some(ref token) = self.session_token {
            Some(format!("Bearer {token}"))
        } else if let (Some(ref username), Some(ref password)) =
            (&self.config.username, &self.config.password)
        {
            let credentials = format!("{username}:{}", password.expose_secret().as_ref());
            let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
            Some(format!("Basic {encoded}"))
        } else {
            None
        }
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        let mut request = self.client.get(url).query(query);
        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        check_status(response).await
    }
}

/// Map a transport-level reqwest error into the domain taxonomy.
fn map_transport_error(err: reqwest::Error) -> QuireError {
    if err.is_timeout() {
        CatalogError::Timeout(err.to_string()).into()
    } else {
        CatalogError::ConnectionFailed(err.to_string()).into()
    }
}

/// Turn non-2xx responses into [`CatalogError`]s.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    let err = if status.is_server_error() {
        CatalogError::ServerError {
            status: status.as_u16(),
            message,
        }
    } else {
        CatalogError::ClientError {
            status: status.as_u16(),
            message,
        }
    };
    Err(err.into())
}

/// Rewrite a generic 404 into a not-found error naming what was asked for.
fn not_found(err: QuireError, describe: impl FnOnce(String) -> CatalogError) -> QuireError {
    match err {
        QuireError::Catalog(CatalogError::ClientError { status: 404, message }) => {
            describe(message).into()
        }
        other => other,
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_collections(&self) -> Result<Vec<CollectionId>> {
        let url = format!("{}/collections", self.base_url);
        let response = self.get(&url, &[("ids_only", "true".to_string())]).await?;

        response
            .json::<Vec<CollectionId>>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()).into())
    }

    async fn get_collection(&self, id: CollectionId) -> Result<Collection> {
        let url = format!("{}/collections/{id}", self.base_url);
        let response = self
            .get(&url, &[])
            .await
            .map_err(|e| not_found(e, |_| CatalogError::CollectionNotFound(id.to_string())))?;

        response
            .json::<Collection>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()).into())
    }

    async fn list_record_ids(&self, collection: CollectionId) -> Result<Vec<RecordId>> {
        let url = format!("{}/collections/{collection}/records", self.base_url);
        let response = self.get(&url, &[("ids_only", "true".to_string())]).await?;

        response
            .json::<Vec<RecordId>>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()).into())
    }

    async fn fetch_record(&self, collection: CollectionId, record: RecordId) -> Result<Record> {
        let url = format!(
            "{}/collections/{collection}/records/{record}",
            self.base_url
        );
        let response = self.get(&url, &[]).await.map_err(|e| {
            not_found(e, |_| {
                CatalogError::RecordNotFound(format!("/collections/{collection}/records/{record}"))
            })
        })?;

        response
            .json::<Record>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()).into())
    }

    async fn fetch_finding_aid(
        &self,
        collection: CollectionId,
        record: RecordId,
        unpublished_notes: bool,
    ) -> Result<Vec<u8>> {
        let url = format!(
            "{}/collections/{collection}/records/{record}/finding-aid.xml",
            self.base_url
        );
        let response = self
            .get(
                &url,
                &[("include_unpublished_notes", unpublished_notes.to_string())],
            )
            .await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn fetch_catalog_record(
        &self,
        collection: CollectionId,
        record: RecordId,
        unpublished_notes: bool,
    ) -> Result<Vec<u8>> {
        let url = format!(
            "{}/collections/{collection}/records/{record}/catalog-record.xml",
            self.base_url
        );
        let response = self
            .get(
                &url,
                &[("include_unpublished_notes", unpublished_notes.to_string())],
            )
            .await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use mockito::Matcher;

    fn test_config(base_url: String) -> CatalogConfig {
        CatalogConfig {
            base_url,
            username: Some("exporter".to_string()),
            password: Some(secret_string("secret")),
            timeout_seconds: 5,
            tls_verify: true,
        }
    }

    #[tokio::test]
    async fn test_authenticate_stores_session_token() {
        let mut server = mockito::Server::new_async().await;
        let _login = server
            .mock("POST", "/session")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token": "tok-1"}"#)
            .create_async()
            .await;

        let mut catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        assert!(!catalog.is_authenticated());
        catalog.authenticate().await.unwrap();
        assert!(catalog.is_authenticated());
    }

    #[tokio::test]
    async fn test_authenticate_failure_maps_to_domain_error() {
        let mut server = mockito::Server::new_async().await;
        let _login = server
            .mock("POST", "/session")
            .with_status(403)
            .with_body("bad credentials")
            .create_async()
            .await;

        let mut catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        let err = catalog.authenticate().await.unwrap_err();
        assert!(matches!(
            err,
            QuireError::Catalog(CatalogError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_session_token_attached_to_requests() {
        let mut server = mockito::Server::new_async().await;
        let _login = server
            .mock("POST", "/session")
            .with_status(200)
            .with_body(r#"{"token": "tok-2"}"#)
            .create_async()
            .await;
        let listing = server
            .mock("GET", "/collections")
            .match_query(Matcher::UrlEncoded("ids_only".into(), "true".into()))
            .match_header("authorization", "Bearer tok-2")
            .with_status(200)
            .with_body("[2, 3]")
            .create_async()
            .await;

        let mut catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        catalog.authenticate().await.unwrap();

        let ids = catalog.list_collections().await.unwrap();
        assert_eq!(ids, vec![CollectionId::new(2), CollectionId::new(3)]);
        listing.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_collection_parses_slug() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/collections/2")
            .with_status(200)
            .with_body(r#"{"id": 2, "slug": "manuscripts", "name": "Manuscripts"}"#)
            .create_async()
            .await;

        let catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        let collection = catalog.get_collection(CollectionId::new(2)).await.unwrap();
        assert_eq!(collection.slug, "manuscripts");
    }

    #[tokio::test]
    async fn test_get_collection_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/collections/99")
            .with_status(404)
            .create_async()
            .await;

        let catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        let err = catalog
            .get_collection(CollectionId::new(99))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QuireError::Catalog(CatalogError::CollectionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_record_parses() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/collections/2/records/5")
            .with_status(200)
            .with_body(
                r#"{
                    "uri": "/collections/2/records/5",
                    "title": "Guide to the Example Papers",
                    "external_id": "MSS_042",
                    "publish": true
                }"#,
            )
            .create_async()
            .await;

        let catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        let record = catalog
            .fetch_record(CollectionId::new(2), RecordId::new(5))
            .await
            .unwrap();
        assert_eq!(record.uri, "/collections/2/records/5");
        assert!(record.publish);
    }

    #[tokio::test]
    async fn test_fetch_finding_aid_returns_bytes() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/collections/2/records/5/finding-aid.xml")
            .match_query(Matcher::UrlEncoded(
                "include_unpublished_notes".into(),
                "false".into(),
            ))
            .with_status(200)
            .with_body("<ead/>")
            .create_async()
            .await;

        let catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        let bytes = catalog
            .fetch_finding_aid(CollectionId::new(2), RecordId::new(5), false)
            .await
            .unwrap();
        assert_eq!(bytes, b"<ead/>".to_vec());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_domain_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/collections/2/records/5/catalog-record.xml")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let catalog = HttpCatalog::new(test_config(server.url())).unwrap();
        let err = catalog
            .fetch_catalog_record(CollectionId::new(2), RecordId::new(5), false)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QuireError::Catalog(CatalogError::ServerError { status: 502, .. })
        ));
    }
}
