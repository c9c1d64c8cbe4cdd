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

//! A pooled HTTP client backed by [`reqwest`].

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use http::{HeaderMap, HeaderName, HeaderValue, Method};

use super::{
    HttpClientError, HttpRequest, HttpResponse, HttpStatus, HttpTransport, write_raw_headers,
};

const DEFAULT_POOL_IDLE_TIMEOUT_SECS: u64 = 90;
const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;
const RAW_HEADERS_CAPACITY: usize = 1024;

/// Provides a high-performance HTTP client for venue REST APIs.
///
/// The client keeps connections alive in a pool and can be cloned cheaply, clones
/// share the same pool. Default headers are attached to every request.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a new [`HttpClient`].
    ///
    /// - `default_headers`: header key value pairs sent with every request.
    /// - `timeout_secs`: optional total timeout applied to each request.
    /// - `proxy_url`: optional proxy all requests are routed through.
    ///
    /// # Errors
    ///
    /// Returns an error if a header is invalid, the proxy URL cannot be parsed,
    /// or the underlying client fails to build.
    pub fn new(
        default_headers: HashMap<String, String>,
        timeout_secs: Option<u64>,
        proxy_url: Option<String>,
    ) -> Result<Self, HttpClientError> {
        let mut header_map = HeaderMap::with_capacity(default_headers.len());
        for (key, value) in default_headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                HttpClientError::ClientBuildError(format!("Invalid header name '{key}': {e}"))
            })?;
            let value = HeaderValue::from_str(&value).map_err(|e| {
                HttpClientError::ClientBuildError(format!("Invalid value for header '{key}': {e}"))
            })?;
            header_map.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(header_map)
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT_SECS))
            .pool_max_idle_per_host(DEFAULT_POOL_MAX_IDLE_PER_HOST);

        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(proxy_url) = proxy_url {
            let proxy = reqwest::Proxy::all(&proxy_url)
                .map_err(|e| HttpClientError::InvalidProxy(format!("{proxy_url}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| HttpClientError::ClientBuildError(e.to_string()))?;

        Ok(Self { client })
    }

    /// Sends a request built from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or times out.
    pub async fn request(
        &self,
        method: Method,
        url: String,
        headers: Option<HeaderMap>,
        body: Option<Bytes>,
    ) -> Result<HttpResponse, HttpClientError> {
        let request = HttpRequest {
            method,
            url,
            headers: headers.unwrap_or_default(),
            body,
        };
        self.send(request).await
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        tracing::trace!("Sending {method} {url}");

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = HttpStatus::new(response.status());

        let mut raw_headers = BytesMut::with_capacity(RAW_HEADERS_CAPACITY);
        write_raw_headers(response.headers(), &mut raw_headers);

        let body = response.bytes().await?;

        tracing::trace!("Received {} ({} bytes)", status.as_u16(), body.len());

        Ok(HttpResponse {
            status,
            headers: raw_headers.freeze(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new_with_defaults() {
        let client = HttpClient::new(HashMap::new(), None, None);
        assert!(client.is_ok());
    }

    #[rstest]
    fn test_new_rejects_invalid_header_name() {
        let headers = HashMap::from([("bad header".to_string(), "value".to_string())]);

        let result = HttpClient::new(headers, Some(10), None);

        assert!(matches!(result, Err(HttpClientError::ClientBuildError(_))));
    }

    #[rstest]
    fn test_new_rejects_invalid_header_value() {
        let headers = HashMap::from([("x-test".to_string(), "line\nbreak".to_string())]);

        let result = HttpClient::new(headers, None, None);

        assert!(matches!(result, Err(HttpClientError::ClientBuildError(_))));
    }

    #[rstest]
    fn test_new_rejects_invalid_proxy() {
        let result = HttpClient::new(HashMap::new(), None, Some("http://[invalid".to_string()));

        assert!(matches!(result, Err(HttpClientError::InvalidProxy(_))));
    }
}
