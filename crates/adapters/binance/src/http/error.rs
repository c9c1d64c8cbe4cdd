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

//! Binance HTTP error types.

use nautilus_network::http::HttpClientError;
use thiserror::Error;

use crate::common::models::BinanceErrorResponse;

/// Binance HTTP client error type.
#[derive(Debug, Clone, Error)]
pub enum BinanceHttpError {
    /// A signed or user data stream request was made without API credentials.
    #[error("Missing API credentials")]
    MissingCredentials,
    /// The parameter set cannot be represented as a URL-encoded payload.
    #[error("Encoding error: {0}")]
    EncodingError(String),
    /// The payload could not be signed.
    #[error("Signing error: {0}")]
    SigningError(String),
    /// Connection, DNS or TLS failure. Safe to retry.
    #[error("Transport error: {0}")]
    TransportError(String),
    /// The request deadline expired. Safe to retry.
    #[error("Timeout: {0}")]
    Timeout(String),
    /// Binance returned a structured error payload.
    #[error("Binance error {code}: {message}")]
    BinanceError {
        /// Binance error code.
        code: i64,
        /// Error message from Binance.
        message: String,
    },
    /// A non-success response whose body is not a Binance error payload.
    #[error("Malformed error body (status {status}): {body}")]
    MalformedErrorBody {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
    /// A success response could not be decoded into the requested type.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl BinanceHttpError {
    /// Returns `true` for transport level failures the caller may retry as is.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::TransportError(_) | Self::Timeout(_))
    }

    /// Returns the Binance error code, if this is a venue error.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::BinanceError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<HttpClientError> for BinanceHttpError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::TimeoutError(msg) => Self::Timeout(msg),
            HttpClientError::Error(msg)
            | HttpClientError::InvalidProxy(msg)
            | HttpClientError::ClientBuildError(msg) => Self::TransportError(msg),
        }
    }
}

impl From<BinanceErrorResponse> for BinanceHttpError {
    fn from(err: BinanceErrorResponse) -> Self {
        Self::BinanceError {
            code: err.code,
            message: err.msg,
        }
    }
}

impl From<serde_json::Error> for BinanceHttpError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Result type for Binance HTTP operations.
pub type BinanceHttpResult<T> = Result<T, BinanceHttpError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_from_error_response() {
        let response = BinanceErrorResponse {
            code: -1121,
            msg: "Invalid symbol.".to_string(),
        };

        let error: BinanceHttpError = response.into();

        assert_eq!(error.code(), Some(-1121));
        assert_eq!(error.to_string(), "Binance error -1121: Invalid symbol.");
        assert!(!error.is_retryable());
    }

    #[rstest]
    fn test_from_http_client_timeout() {
        let error: BinanceHttpError = HttpClientError::TimeoutError("10s".to_string()).into();

        assert!(matches!(error, BinanceHttpError::Timeout(_)));
        assert!(error.is_retryable());
    }

    #[rstest]
    #[case(HttpClientError::Error("connection refused".to_string()))]
    #[case(HttpClientError::InvalidProxy("bad".to_string()))]
    #[case(HttpClientError::ClientBuildError("tls".to_string()))]
    fn test_from_http_client_other(#[case] source: HttpClientError) {
        let error: BinanceHttpError = source.into();

        assert!(matches!(error, BinanceHttpError::TransportError(_)));
        assert_eq!(error.code(), None);
    }

    #[rstest]
    fn test_malformed_error_body_display() {
        let error = BinanceHttpError::MalformedErrorBody {
            status: 502,
            body: "Bad Gateway".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Malformed error body (status 502): Bad Gateway"
        );
    }
}
