//! `InventoryApi` over HTTP.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use fleet_core::ApiError;
use fleet_core::ports::{InventoryApi, SessionStore};
use fleet_shared::{
    Chart, ChartType, ErrorResponse, LoginRequest, NewVehicle, Session, Summary, User, Vehicle,
    VehicleList,
};

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Scheme, host and port of the API, without the `/api` prefix.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// reqwest client for the inventory API.
///
/// Attaches `Authorization: Bearer <token>` whenever the session store holds
/// a session. Each call is a single request; nothing is retried.
pub struct HttpInventoryApi {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl HttpInventoryApi {
    pub fn new(config: HttpConfig, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.get().await {
            Ok(Some(session)) => request.bearer_auth(session.token),
            Ok(None) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Session unreadable, sending request without token");
                request
            }
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = self.authorized(request).await;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "API response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.json(self.client.get(self.url(path))).await
    }
}

/// Map a non-success response to an `ApiError`, using the problem details
/// body for the message when there is one.
fn status_error(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ => {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .map(|problem| problem.message().to_string())
                .ok()
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_else(|| "Unknown error".to_string());
            ApiError::Status {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.json(self.client.post(self.url("/login")).json(&body))
            .await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/me").await
    }

    async fn summary(&self) -> Result<Summary, ApiError> {
        self.get("/summary").await
    }

    async fn chart(&self, kind: ChartType) -> Result<Vec<Chart>, ApiError> {
        let request = self
            .client
            .get(self.url("/chart"))
            .query(&[("type", kind)]);
        self.json(request).await
    }

    async fn vehicles(&self, page: i64, query: &str) -> Result<VehicleList, ApiError> {
        let request = self
            .client
            .get(self.url("/vehicles"))
            .query(&[("page", page.to_string()), ("q", query.to_string())]);
        self.json(request).await
    }

    async fn vehicle(&self, id: &str) -> Result<Vehicle, ApiError> {
        self.get(&format!("/vehicles/{}", urlencoding::encode(id))).await
    }

    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle, ApiError> {
        self.json(self.client.post(self.url("/vehicles")).json(vehicle))
            .await
    }

    async fn delete_vehicle(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/vehicles/{}", urlencoding::encode(id)));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn manufacturers(&self) -> Result<Vec<String>, ApiError> {
        self.get("/manufacturers").await
    }

    async fn models(&self) -> Result<Vec<String>, ApiError> {
        self.get("/models").await
    }

    async fn types(&self) -> Result<Vec<String>, ApiError> {
        self.get("/types").await
    }

    async fn colors(&self) -> Result<Vec<String>, ApiError> {
        self.get("/colors").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySessionStore;

    #[test]
    fn test_status_error_maps_auth_and_missing() {
        assert_eq!(status_error(StatusCode::UNAUTHORIZED, ""), ApiError::Unauthorized);
        assert_eq!(status_error(StatusCode::NOT_FOUND, "{}"), ApiError::NotFound);
    }

    #[test]
    fn test_status_error_reads_problem_details() {
        let body = serde_json::to_string(
            &ErrorResponse::bad_request("Mileage must be a number"),
        )
        .unwrap();

        assert_eq!(
            status_error(StatusCode::BAD_REQUEST, &body),
            ApiError::Status {
                status: 400,
                message: "Mileage must be a number".to_string(),
            }
        );
    }

    #[test]
    fn test_status_error_falls_back_to_reason() {
        assert_eq!(
            status_error(StatusCode::SERVICE_UNAVAILABLE, "<html>"),
            ApiError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            }
        );
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let api = HttpInventoryApi::new(
            HttpConfig {
                base_url: "http://localhost:9000/".to_string(),
                ..HttpConfig::default()
            },
            Arc::new(InMemorySessionStore::new()),
        )
        .unwrap();

        assert_eq!(api.url("/vehicles"), "http://localhost:9000/api/vehicles");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let api = HttpInventoryApi::new(
            HttpConfig {
                base_url: "http://127.0.0.1:1".to_string(),
                timeout: Duration::from_secs(2),
            },
            Arc::new(InMemorySessionStore::new()),
        )
        .unwrap();

        assert!(matches!(api.summary().await, Err(ApiError::Transport(_))));
    }
}
