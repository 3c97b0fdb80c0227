//! HTTP client for the coffee shop drinks API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use tracing::{debug, warn};
use url::Url;

use super::types::{DrinksResponse, ErrorBody};
use super::{ApiError, Drink, DrinkPatch, DrinksApi, NewDrink, Result, request_target};
use crate::config::DeploymentSettings;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the drinks API.
#[derive(Debug, Clone)]
pub struct DrinksClient {
    base_url: String,
    http_client: HttpClient,
}

impl DrinksClient {
    /// Creates a client for the API served at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Creates a client from the deployment's `api_server_url`.
    pub fn from_settings(settings: &DeploymentSettings) -> Result<Self> {
        Self::new(settings.api_server_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = request_target(&self.base_url, path);
        debug!(method = %method, url = %url, "api request");
        self.http_client.request(method, url)
    }

    fn authorized(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }

    /// Sends the request and unwraps the `{"success": ..., "drinks": ...}` envelope.
    async fn send(&self, request: RequestBuilder) -> Result<DrinksResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            warn!(status = status.as_u16(), message = %message, "api request failed");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: DrinksResponse = serde_json::from_str(&body)?;
        if !parsed.success {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: "request reported failure".to_string(),
            });
        }

        Ok(parsed)
    }

    fn single(response: DrinksResponse) -> Result<Drink> {
        response
            .drinks
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Server {
                status: 200,
                message: "response contained no drink".to_string(),
            })
    }
}

#[async_trait]
impl DrinksApi for DrinksClient {
    async fn list_drinks(&self, token: Option<&str>) -> Result<Vec<Drink>> {
        let request = match token {
            Some(token) => self.authorized(Method::GET, "/drinks", token),
            None => self.request(Method::GET, "/drinks"),
        };
        let response = self.send(request).await?;
        Ok(response.drinks)
    }

    async fn list_drink_details(&self, token: &str) -> Result<Vec<Drink>> {
        let response = self
            .send(self.authorized(Method::GET, "/drinks-detail", token))
            .await?;
        Ok(response.drinks)
    }

    async fn create_drink(&self, token: &str, drink: &NewDrink) -> Result<Drink> {
        let request = self.authorized(Method::POST, "/drinks", token).json(drink);
        Self::single(self.send(request).await?)
    }

    async fn update_drink(&self, token: &str, id: u64, patch: &DrinkPatch) -> Result<Drink> {
        let request = self
            .authorized(Method::PATCH, &format!("/drinks/{}", id), token)
            .json(patch);
        Self::single(self.send(request).await?)
    }

    async fn delete_drink(&self, token: &str, id: u64) -> Result<u64> {
        let response = self
            .send(self.authorized(Method::DELETE, &format!("/drinks/{}", id), token))
            .await?;
        Ok(response
            .delete
            .or_else(|| response.drinks.first().map(|d| d.id))
            .unwrap_or(id))
    }
}
