use std::{future::Future, time::Duration};

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{
    api::types::ApiError,
    config,
    utils::{cookie, navigation},
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: build_http_client(REQUEST_TIMEOUT),
            base_url: None,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::new_with_base_url_and_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub(crate) fn new_with_base_url_and_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        Self {
            client: build_http_client(timeout),
            base_url: Some(base.trim_end_matches('/').to_string()),
            timeout,
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::api_base_url().await
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn request_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = cookie::read_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => log::warn!("session token is not a valid header value"),
            }
        }
        if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        headers
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            cookie::clear_token();
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        let current = navigation::current_path();
        if current.as_deref() == Some("/login") {
            return;
        }
        navigation::redirect(&navigation::login_path_with_redirect(current.as_deref()));
    }

    /// Sends with the session headers and the fixed timeout. A 401 clears the
    /// session before the response is handed back.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = with_timeout(request.headers(Self::request_headers()).send(), self.timeout)
            .await?
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::timeout()
                } else {
                    log::warn!("request failed: {}", e);
                    ApiError::request_failed(format!("Request failed: {}", e))
                }
            })?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            log::error!("server error {}: {}", status, body);
        }
        ApiError::from_response(status.as_u16(), &body)
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        serde_json::from_str(&body).map_err(|e| {
            log::warn!("unexpected response shape: {}", e);
            ApiError::unknown(format!("Failed to parse response: {}", e))
        })
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let mut request = self.http_client().get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = self.send(request).await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path).await;
        let response = self.send(self.http_client().post(url).json(body)).await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn post_empty<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path).await;
        let response = self.send(self.http_client().post(url).json(body)).await?;
        self.map_empty_response(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path).await;
        let response = self.send(self.http_client().put(url).json(body)).await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn put_empty<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path).await;
        let response = self.send(self.http_client().put(url).json(body)).await?;
        self.map_empty_response(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path).await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_timeout: Duration) -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("falling back to default HTTP client: {}", e);
            Client::new()
        })
}

/// Browser fetch has no timeout of its own; race it against a timer.
#[cfg(target_arch = "wasm32")]
async fn with_timeout<F: Future>(future: F, timeout: Duration) -> Result<F::Output, ApiError> {
    use futures::future::{select, Either};

    let timer = gloo_timers::future::TimeoutFuture::new(timeout.as_millis() as u32);
    futures::pin_mut!(future);
    match select(future, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => {
            log::warn!("request timed out after {:?}", timeout);
            Err(ApiError::timeout())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<F: Future>(future: F, _timeout: Duration) -> Result<F::Output, ApiError> {
    Ok(future.await)
}
