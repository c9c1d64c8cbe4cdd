// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Binance HTTP client implementation.
//!
//! [`BinanceRawHttpClient`] turns a `(method, endpoint, params, sign, stream)` call into a wire
//! request, executes it over an [`HttpTransport`] and records the throttling metrics Binance
//! returns on every response. [`BinanceHttpClient`] layers typed endpoints on top.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use ahash::AHashMap;
use bytes::Bytes;
use chrono::Utc;
use http::{
    HeaderName, HeaderValue,
    header::{ACCEPT, CONTENT_TYPE},
};
use nautilus_network::http::{HttpClient, HttpRequest, HttpResponse, HttpTransport, Method};
use serde::{Serialize, de::DeserializeOwned};
use ustr::Ustr;

use super::{
    error::{BinanceHttpError, BinanceHttpResult},
    models::{BinanceListenKey, BinancePing, BinanceServerTime},
    query::{BinanceListenKeyParams, encode_params},
    ratelimit::{find_header, header_values, parse_interval, parse_retry_after},
    usage::BinanceRateLimitUsage,
};
use crate::{
    common::{
        consts::{
            BINANCE_API_KEY_HEADER, BINANCE_MAX_RECV_WINDOW_MS, BINANCE_ORDER_COUNT_HEADER,
            BINANCE_PING_PATH,
            BINANCE_RETRY_AFTER_HEADER, BINANCE_SIGNATURE_SUFFIX_CAPACITY, BINANCE_TIME_PATH,
            BINANCE_USED_WEIGHT_HEADER, BINANCE_USER_AGENT, BINANCE_USER_DATA_STREAM_PATH,
            CONTENT_TYPE_FORM, CONTENT_TYPE_JSON,
        },
        credential::Credential,
        models::BinanceErrorResponse,
    },
    config::BinanceHttpClientConfig,
};

/// Lightweight raw HTTP client for Binance REST API access.
///
/// Handles:
/// - Canonical parameter encoding and optional HMAC SHA256 signing.
/// - The `X-MBX-APIKEY` header for signed and user data stream requests.
/// - Recording used weight, order count and retry-after metrics from every response.
/// - Decoding Binance error payloads on non-success responses.
///
/// The client never retries. Clones share the transport, credentials, response window and
/// usage store.
#[derive(Debug, Clone)]
pub struct BinanceRawHttpClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    credential: Option<Arc<Credential>>,
    recv_window_ms: Arc<AtomicU64>,
    usage: Arc<BinanceRateLimitUsage>,
    timeout: Option<Duration>,
}

impl BinanceRawHttpClient {
    /// Creates a new [`BinanceRawHttpClient`] backed by a pooled [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying [`HttpClient`] fails to build or only one of the
    /// API key and secret is configured.
    pub fn new(config: &BinanceHttpClientConfig) -> BinanceHttpResult<Self> {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), BINANCE_USER_AGENT.to_string());

        let client = HttpClient::new(headers, config.timeout_secs, config.proxy_url.clone())?;

        Self::with_transport(config, Arc::new(client))
    }

    /// Creates a new [`BinanceRawHttpClient`] executing requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if only one of the API key and secret is configured.
    pub fn with_transport(
        config: &BinanceHttpClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> BinanceHttpResult<Self> {
        let credential = match (&config.api_key, &config.api_secret) {
            (Some(key), Some(secret)) => Some(Arc::new(Credential::new(key, secret.as_str()))),
            (None, None) => None,
            _ => return Err(BinanceHttpError::MissingCredentials),
        };

        Ok(Self {
            transport,
            base_url: config.http_url().trim_end_matches('/').to_string(),
            credential,
            recv_window_ms: Arc::new(AtomicU64::new(config.recv_window())),
            usage: Arc::new(BinanceRateLimitUsage::new()),
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    /// Returns the HTTP base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` if API credentials are configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credential.is_some()
    }

    /// Sets the response window applied to subsequent signed requests.
    ///
    /// Values above the venue maximum of 60 000 ms are capped.
    pub fn set_recv_window(&self, recv_window_ms: u64) {
        let recv_window_ms = if recv_window_ms > BINANCE_MAX_RECV_WINDOW_MS {
            tracing::warn!(
                recv_window_ms,
                max = BINANCE_MAX_RECV_WINDOW_MS,
                "recvWindow above venue maximum, capping"
            );
            BINANCE_MAX_RECV_WINDOW_MS
        } else {
            recv_window_ms
        };
        self.recv_window_ms.store(recv_window_ms, Ordering::Relaxed);
    }

    /// Returns the current response window in milliseconds.
    #[must_use]
    pub fn recv_window(&self) -> u64 {
        self.recv_window_ms.load(Ordering::Relaxed)
    }

    /// Returns the shared usage store.
    #[must_use]
    pub fn usage(&self) -> Arc<BinanceRateLimitUsage> {
        self.usage.clone()
    }

    /// Returns a snapshot of the latest used request weight per interval.
    #[must_use]
    pub fn used_weight(&self) -> AHashMap<Ustr, u64> {
        self.usage.used_weight()
    }

    /// Returns a snapshot of the latest order count per interval.
    #[must_use]
    pub fn order_count(&self) -> AHashMap<Ustr, u64> {
        self.usage.order_count()
    }

    /// Returns the latest retry-after hint in seconds (0 if never observed).
    #[must_use]
    pub fn retry_after_secs(&self) -> u64 {
        self.usage.retry_after_secs()
    }

    /// Executes a request and returns the raw response body on success.
    ///
    /// For `GET` the encoded payload becomes the query string, for any other method it is
    /// sent as a form body. When `sign` is set `timestamp`, `recvWindow` and `signature` are
    /// appended. The API key header is attached when `sign` or `stream` is set.
    ///
    /// Throttling metrics are recorded from the response headers whatever the status.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or signing fails, credentials are missing, the transport
    /// fails or times out, or Binance answers with a non-success status.
    pub async fn execute<P>(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&P>,
        sign: bool,
        stream: bool,
    ) -> BinanceHttpResult<Bytes>
    where
        P: Serialize + ?Sized,
    {
        let mut payload = match params {
            Some(params) => encode_params(params)?,
            None => String::new(),
        };

        let credential = if sign || stream {
            Some(
                self.credential
                    .as_deref()
                    .ok_or(BinanceHttpError::MissingCredentials)?,
            )
        } else {
            None
        };

        if sign && let Some(credential) = credential {
            let timestamp_ms = Self::timestamp_ms()?;
            payload.reserve(BINANCE_SIGNATURE_SUFFIX_CAPACITY);
            credential.sign_payload(&mut payload, timestamp_ms, self.recv_window());
        }

        let request = self.build_request(method, endpoint, payload, credential)?;
        let method = request.method.clone();

        let response = self.send(request).await?;
        let status = response.status.as_u16();

        tracing::debug!(%method, endpoint, sign, stream, status, "Executed Binance request");

        self.record_usage(&response.headers);

        if !response.status.is_success() {
            return Err(self.handle_error_response(&response));
        }

        Ok(response.body)
    }

    fn timestamp_ms() -> BinanceHttpResult<u64> {
        u64::try_from(Utc::now().timestamp_millis())
            .map_err(|e| BinanceHttpError::SigningError(format!("Invalid timestamp: {e}")))
    }

    fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        payload: String,
        credential: Option<&Credential>,
    ) -> BinanceHttpResult<HttpRequest> {
        let is_get = method == Method::GET;

        let capacity = self.base_url.len() + endpoint.len() + payload.len() + 1;
        let mut url = String::with_capacity(capacity);
        url.push_str(&self.base_url);
        url.push_str(endpoint);

        if is_get && !payload.is_empty() {
            url.push('?');
            url.push_str(&payload);
        }

        let mut request = HttpRequest::new(method, url);
        request
            .headers
            .insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));

        if let Some(credential) = credential {
            let api_key = HeaderValue::from_str(credential.api_key())
                .map_err(|e| BinanceHttpError::EncodingError(format!("Invalid API key: {e}")))?;
            request
                .headers
                .insert(HeaderName::from_static(BINANCE_API_KEY_HEADER), api_key);
        }

        if !is_get {
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_FORM));
            request.body = Some(Bytes::from(payload));
        }

        Ok(request)
    }

    async fn send(&self, request: HttpRequest) -> BinanceHttpResult<HttpResponse> {
        let future = self.transport.send(request);

        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, future)
                .await
                .map_err(|_| {
                    BinanceHttpError::Timeout(format!(
                        "No response within {}s",
                        timeout.as_secs_f64()
                    ))
                })?,
            None => future.await,
        };

        Ok(result?)
    }

    fn record_usage(&self, headers: &[u8]) {
        for value in header_values(headers, BINANCE_USED_WEIGHT_HEADER) {
            match parse_interval(value) {
                Some((interval, weight)) => {
                    tracing::trace!(interval, weight, "Used weight updated");
                    self.usage.update_used_weight(interval, weight);
                }
                None => log_malformed("used weight", value),
            }
        }

        for value in header_values(headers, BINANCE_ORDER_COUNT_HEADER) {
            match parse_interval(value) {
                Some((interval, count)) => {
                    tracing::trace!(interval, count, "Order count updated");
                    self.usage.update_order_count(interval, count);
                }
                None => log_malformed("order count", value),
            }
        }
    }

    fn handle_error_response(&self, response: &HttpResponse) -> BinanceHttpError {
        let status = response.status.as_u16();

        if let Some(value) = find_header(&response.headers, BINANCE_RETRY_AFTER_HEADER) {
            match parse_retry_after(value) {
                Some(secs) => {
                    tracing::warn!(status, retry_after_secs = secs, "Binance requested back-off");
                    self.usage.set_retry_after_secs(secs);
                }
                None => log_malformed("retry after", value),
            }
        }

        match serde_json::from_slice::<BinanceErrorResponse>(&response.body) {
            Ok(err) => err.into(),
            Err(_) => BinanceHttpError::MalformedErrorBody {
                status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            },
        }
    }
}

fn log_malformed(metric: &str, value: &[u8]) {
    tracing::debug!(
        metric,
        value = %String::from_utf8_lossy(value),
        "Skipping malformed rate limit header"
    );
}

/// Higher-level HTTP client providing typed Binance endpoints.
#[derive(Debug, Clone)]
pub struct BinanceHttpClient {
    raw: BinanceRawHttpClient,
}

impl BinanceHttpClient {
    /// Creates a new [`BinanceHttpClient`] backed by a pooled [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created or credentials are
    /// incomplete.
    pub fn new(config: &BinanceHttpClientConfig) -> BinanceHttpResult<Self> {
        Ok(Self::from_raw(BinanceRawHttpClient::new(config)?))
    }

    /// Creates a new [`BinanceHttpClient`] executing requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are incomplete.
    pub fn with_transport(
        config: &BinanceHttpClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> BinanceHttpResult<Self> {
        Ok(Self::from_raw(BinanceRawHttpClient::with_transport(
            config, transport,
        )?))
    }

    /// Wraps an existing raw client.
    #[must_use]
    pub const fn from_raw(raw: BinanceRawHttpClient) -> Self {
        Self { raw }
    }

    /// Returns the underlying raw client.
    #[must_use]
    pub const fn raw(&self) -> &BinanceRawHttpClient {
        &self.raw
    }

    /// Performs a `GET` request and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns any error of [`BinanceRawHttpClient::execute`], or [`BinanceHttpError::JsonError`]
    /// if the body does not match `T`.
    pub async fn get<P, T>(
        &self,
        endpoint: &str,
        params: Option<&P>,
        sign: bool,
    ) -> BinanceHttpResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::GET, endpoint, params, sign, false)
            .await
    }

    /// Performs a `POST` request with a form body and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns any error of [`BinanceRawHttpClient::execute`], or [`BinanceHttpError::JsonError`]
    /// if the body does not match `T`.
    pub async fn post<P, T>(
        &self,
        endpoint: &str,
        params: Option<&P>,
        sign: bool,
        stream: bool,
    ) -> BinanceHttpResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, endpoint, params, sign, stream)
            .await
    }

    async fn request<P, T>(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&P>,
        sign: bool,
        stream: bool,
    ) -> BinanceHttpResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self
            .raw
            .execute(method, endpoint, params, sign, stream)
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Tests connectivity to the REST API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn ping(&self) -> BinanceHttpResult<()> {
        self.get::<(), BinancePing>(BINANCE_PING_PATH, None, false)
            .await
            .map(|_| ())
    }

    /// Returns the server time in milliseconds since the UNIX epoch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn server_time(&self) -> BinanceHttpResult<i64> {
        self.get::<(), BinanceServerTime>(BINANCE_TIME_PATH, None, false)
            .await
            .map(|time| time.server_time)
    }

    /// Starts a user data stream and returns its listen key.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the request fails.
    pub async fn create_listen_key(&self) -> BinanceHttpResult<String> {
        self.post::<(), BinanceListenKey>(BINANCE_USER_DATA_STREAM_PATH, None, false, true)
            .await
            .map(|key| key.listen_key)
    }

    /// Extends the validity of a user data stream by 60 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the request fails.
    pub async fn keepalive_listen_key(&self, listen_key: &str) -> BinanceHttpResult<()> {
        let params = BinanceListenKeyParams::new(listen_key);
        self.request::<_, serde_json::Value>(
            Method::PUT,
            BINANCE_USER_DATA_STREAM_PATH,
            Some(&params),
            false,
            true,
        )
        .await
        .map(|_| ())
    }

    /// Closes a user data stream.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the request fails.
    pub async fn close_listen_key(&self, listen_key: &str) -> BinanceHttpResult<()> {
        let params = BinanceListenKeyParams::new(listen_key);
        self.request::<_, serde_json::Value>(
            Method::DELETE,
            BINANCE_USER_DATA_STREAM_PATH,
            Some(&params),
            false,
            true,
        )
        .await
        .map(|_| ())
    }
}
