//! Catalog backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use super::dto::ErrorResponse;
use crate::domain::entities::{EntityId, NamedRef};
use crate::domain::errors::ApiError;
use crate::domain::ports::{ReferencePort, ResourcePort};
use crate::domain::resource::{Resource, ResourceKind};

const API_PREFIX: &str = "api/v1";
const USER_AGENT: &str = concat!("bookvault/", env!("CARGO_PKG_VERSION"));
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// REST client for the `{base}/api/v1/{collection}` catalog backend.
///
/// One client serves every collection; it is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    client: Client,
    base_url: String,
}

impl LibraryClient {
    /// Creates client for the given backend address.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the backend address without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{API_PREFIX}/{}", self.base_url, kind.collection())
    }

    fn record_url(&self, kind: ResourceKind, id: EntityId) -> String {
        format!("{}/{id}", self.collection_url(kind))
    }

    /// Sends a request tagged with a fresh request id and turns transport
    /// failures and non-success statuses into errors.
    async fn send(
        &self,
        kind: ResourceKind,
        request: RequestBuilder,
        id: Option<EntityId>,
    ) -> Result<Response, ApiError> {
        let request_id = Uuid::new_v4();
        let response = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                warn!(resource = %kind, request_id = %request_id, error = %e, "Failed to reach catalog backend");
                if e.is_timeout() {
                    ApiError::Timeout
                } else if e.is_connect() {
                    ApiError::network("failed to connect to catalog backend")
                } else {
                    ApiError::network(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(resource = %kind, request_id = %request_id, status = status.as_u16(), "Catalog response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response, id).await)
        }
    }

    async fn handle_error_response(
        status: StatusCode,
        response: Response,
        id: Option<EntityId>,
    ) -> ApiError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.into_message(),
            Err(_) => None,
        }
        .unwrap_or_else(|| format!("HTTP {status}"));

        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => ApiError::NotFound { id: id.to_string() },
            (StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT, _) => ApiError::Timeout,
            _ => ApiError::status(status.as_u16(), message),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse catalog response");
            ApiError::decode(e.to_string())
        })
    }

    async fn fetch_list<T: DeserializeOwned>(&self, kind: ResourceKind) -> Result<Vec<T>, ApiError> {
        let request = self.client.get(self.collection_url(kind));
        let response = self.send(kind, request, None).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl<R: Resource> ResourcePort<R> for LibraryClient {
    async fn list(&self) -> Result<Vec<R::Entity>, ApiError> {
        self.fetch_list(R::KIND).await
    }

    async fn create(&self, payload: &R::Payload) -> Result<R::Entity, ApiError> {
        let request = self.client.post(self.collection_url(R::KIND)).json(payload);
        let response = self.send(R::KIND, request, None).await?;
        Self::decode(response).await
    }

    async fn update(&self, id: EntityId, payload: &R::Payload) -> Result<R::Entity, ApiError> {
        let request = self.client.put(self.record_url(R::KIND, id)).json(payload);
        let response = self.send(R::KIND, request, Some(id)).await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let request = self.client.delete(self.record_url(R::KIND, id));
        self.send(R::KIND, request, Some(id)).await?;
        Ok(())
    }
}

#[async_trait]
impl ReferencePort for LibraryClient {
    async fn options(&self, kind: ResourceKind) -> Result<Vec<NamedRef>, ApiError> {
        self.fetch_list(kind).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Author, Authors, BookPayload, Books, Categories, IdRef,
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned response and hands back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if is_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    fn is_complete(request: &[u8]) -> bool {
        let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&request[..end]).to_lowercase();
        let length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= end + 4 + length
    }

    fn client(base_url: &str) -> LibraryClient {
        LibraryClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = client("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.record_url(ResourceKind::Borrowing, EntityId(4)),
            "http://localhost:8080/api/v1/borrows/4"
        );
    }

    #[tokio::test]
    async fn test_list_authors() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"id":7,"name":"Jane Doe","birthDate":"1975-03-02","country":"UK"}]"#,
        )
        .await;

        let authors = ResourcePort::<Authors>::list(&client(&base_url)).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(
            authors,
            vec![Author {
                id: EntityId(7),
                name: "Jane Doe".to_string(),
                birth_date: "1975-03-02".to_string(),
                country: "UK".to_string(),
            }]
        );
        assert!(request.starts_with("GET /api/v1/authors HTTP/1.1"));
        assert!(request.to_lowercase().contains("x-request-id:"));
    }

    #[tokio::test]
    async fn test_update_book_sends_integer_stock() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"id":3,"name":"Snow","publicationYear":2002,"stock":12,
                "author":{"id":1,"name":"Orhan Pamuk"},"publisher":{"id":2,"name":"Faber"},
                "categories":[{"id":4,"name":"Novel"}]}"#,
        )
        .await;

        let payload = BookPayload {
            name: "Snow".to_string(),
            publication_year: 2002,
            stock: 12,
            author: IdRef::new(EntityId(1)),
            publisher: IdRef::new(EntityId(2)),
            categories: vec![IdRef::new(EntityId(4))],
        };
        let book = ResourcePort::<Books>::update(&client(&base_url), EntityId(3), &payload)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(book.stock, Some(12));
        assert!(request.starts_with("PUT /api/v1/books/3 HTTP/1.1"));
        assert!(request.contains(r#""stock":12"#));
        assert!(request.contains(r#""categories":[{"id":4}]"#));
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let (base_url, server) = serve_once("200 OK", "").await;

        ResourcePort::<Categories>::delete(&client(&base_url), EntityId(9))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("DELETE /api/v1/categories/9 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_server_error_carries_message() {
        let (base_url, _server) = serve_once(
            "500 Internal Server Error",
            r#"{"status":500,"error":"Internal Server Error","message":"book is borrowed"}"#,
        )
        .await;

        let error = ResourcePort::<Books>::delete(&client(&base_url), EntityId(1))
            .await
            .unwrap_err();

        assert!(
            matches!(error, ApiError::Status { status: 500, ref message } if message == "book is borrowed")
        );
    }

    #[tokio::test]
    async fn test_missing_record_maps_to_not_found() {
        let (base_url, _server) = serve_once("404 Not Found", "").await;

        let error = ResourcePort::<Authors>::delete(&client(&base_url), EntityId(42))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::NotFound { ref id } if id == "42"));
        assert_eq!(error.http_status(), Some(404));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base_url, _server) = serve_once("200 OK", "[{\"id\":").await;

        let error = ResourcePort::<Authors>::list(&client(&base_url))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let error = ResourcePort::<Authors>::list(&client(&base_url))
            .await
            .unwrap_err();

        assert!(error.is_network_error());
    }

    #[tokio::test]
    async fn test_reference_options_keep_id_and_name() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"id":2,"name":"Faber","establishmentYear":1929,"address":"London"}]"#,
        )
        .await;

        let options = client(&base_url)
            .options(ResourceKind::Publisher)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(options, vec![NamedRef::new(2, "Faber")]);
        assert!(request.starts_with("GET /api/v1/publishers HTTP/1.1"));
    }
}
