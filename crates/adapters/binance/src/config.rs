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

//! Binance adapter configuration structures.

use std::fmt::Debug;

use crate::common::{
    consts::{
        BINANCE_DEFAULT_RECV_WINDOW_MS, BINANCE_MAX_RECV_WINDOW_MS, BINANCE_WS_READ_TIMEOUT_SECS,
    },
    enums::BinanceEnvironment,
    urls::{get_http_base_url, get_ws_base_url},
};

/// Environment variable holding the Binance API key.
pub const BINANCE_API_KEY_ENV: &str = "BINANCE_API_KEY";

/// Environment variable holding the Binance API secret.
pub const BINANCE_API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Configuration for the Binance HTTP clients.
#[derive(Clone)]
pub struct BinanceHttpClientConfig {
    /// API key for signed and user data stream endpoints.
    pub api_key: Option<String>,
    /// API secret for request signing.
    pub api_secret: Option<String>,
    /// Environment (mainnet or testnet).
    pub environment: BinanceEnvironment,
    /// Optional base URL override for the HTTP API.
    pub base_url_http: Option<String>,
    /// Response window for signed requests in milliseconds (0 uses the default).
    pub recv_window_ms: u64,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Optional proxy URL for all requests.
    pub proxy_url: Option<String>,
}

impl Default for BinanceHttpClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            environment: BinanceEnvironment::Mainnet,
            base_url_http: None,
            recv_window_ms: BINANCE_DEFAULT_RECV_WINDOW_MS,
            timeout_secs: Some(60),
            proxy_url: None,
        }
    }
}

impl Debug for BinanceHttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const REDACTED: &str = "<redacted>";

        f.debug_struct(stringify!(BinanceHttpClientConfig))
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("api_secret", &self.api_secret.as_ref().map(|_| REDACTED))
            .field("environment", &self.environment)
            .field("base_url_http", &self.base_url_http)
            .field("recv_window_ms", &self.recv_window_ms)
            .field("timeout_secs", &self.timeout_secs)
            .field("proxy_url", &self.proxy_url)
            .finish()
    }
}

impl BinanceHttpClientConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.api_key = Some(api_key.into());
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Fills any missing credential from the `BINANCE_API_KEY` and `BINANCE_API_SECRET`
    /// environment variables.
    #[must_use]
    pub fn with_env_credentials(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var(BINANCE_API_KEY_ENV).ok();
        }
        if self.api_secret.is_none() {
            self.api_secret = std::env::var(BINANCE_API_SECRET_ENV).ok();
        }
        self
    }

    /// Returns `true` when both the API key and secret are populated.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Returns the HTTP base URL, respecting the environment and overrides.
    #[must_use]
    pub fn http_url(&self) -> String {
        self.base_url_http
            .clone()
            .unwrap_or_else(|| get_http_base_url(self.environment).to_string())
    }

    /// Returns the effective response window in milliseconds.
    ///
    /// Zero selects the default and values above the venue maximum are capped.
    #[must_use]
    pub const fn recv_window(&self) -> u64 {
        if self.recv_window_ms == 0 {
            BINANCE_DEFAULT_RECV_WINDOW_MS
        } else if self.recv_window_ms > BINANCE_MAX_RECV_WINDOW_MS {
            BINANCE_MAX_RECV_WINDOW_MS
        } else {
            self.recv_window_ms
        }
    }
}

/// Configuration for the Binance stream factory.
#[derive(Clone, Debug)]
pub struct BinanceStreamConfig {
    /// Environment (mainnet or testnet).
    pub environment: BinanceEnvironment,
    /// Optional base URL override for the stream endpoints.
    pub base_url_ws: Option<String>,
    /// Read timeout applied to market data streams in seconds.
    pub read_timeout_secs: u64,
}

impl Default for BinanceStreamConfig {
    fn default() -> Self {
        Self {
            environment: BinanceEnvironment::Mainnet,
            base_url_ws: None,
            read_timeout_secs: BINANCE_WS_READ_TIMEOUT_SECS,
        }
    }
}

impl BinanceStreamConfig {
    /// Returns the stream base URL, respecting the environment and overrides.
    #[must_use]
    pub fn ws_url(&self) -> String {
        self.base_url_ws
            .clone()
            .unwrap_or_else(|| get_ws_base_url(self.environment).to_string())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config() {
        let config = BinanceHttpClientConfig::default();

        assert!(!config.has_credentials());
        assert_eq!(config.environment, BinanceEnvironment::Mainnet);
        assert_eq!(config.recv_window(), 5_000);
        assert_eq!(config.http_url(), "https://api.binance.com");
    }

    #[rstest]
    #[case(0, BINANCE_DEFAULT_RECV_WINDOW_MS)]
    #[case(10_000, 10_000)]
    #[case(120_000, BINANCE_MAX_RECV_WINDOW_MS)]
    fn test_recv_window(#[case] recv_window_ms: u64, #[case] expected: u64) {
        let config = BinanceHttpClientConfig {
            recv_window_ms,
            ..Default::default()
        };

        assert_eq!(config.recv_window(), expected);
    }

    #[rstest]
    fn test_http_url_override_and_testnet() {
        let testnet = BinanceHttpClientConfig {
            environment: BinanceEnvironment::Testnet,
            ..Default::default()
        };
        let overridden = BinanceHttpClientConfig {
            base_url_http: Some("http://127.0.0.1:9000".to_string()),
            ..testnet.clone()
        };

        assert_eq!(testnet.http_url(), "https://testnet.binance.vision");
        assert_eq!(overridden.http_url(), "http://127.0.0.1:9000");
    }

    #[rstest]
    fn test_debug_redacts_credentials() {
        let config = BinanceHttpClientConfig::new().with_credentials("my_key", "my_secret");
        let debug = format!("{config:?}");

        assert!(config.has_credentials());
        assert!(!debug.contains("my_key"));
        assert!(!debug.contains("my_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[rstest]
    fn test_stream_config_urls() {
        let config = BinanceStreamConfig::default();
        let testnet = BinanceStreamConfig {
            environment: BinanceEnvironment::Testnet,
            ..Default::default()
        };

        assert_eq!(config.ws_url(), "wss://stream.binance.com:9443/ws");
        assert_eq!(testnet.ws_url(), "wss://testnet.binance.vision/ws");
        assert_eq!(config.read_timeout_secs, 60);
    }
}
