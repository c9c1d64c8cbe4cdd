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

//! Error types for HTTP transport operations.

use thiserror::Error;

/// A typed error enumeration for the HTTP transport layer.
#[derive(Debug, Clone, Error)]
pub enum HttpClientError {
    /// The request could not be sent, or the response could not be read.
    #[error("HTTP error occurred: {0}")]
    Error(String),
    /// The request did not complete within the configured timeout.
    #[error("HTTP request timed out: {0}")]
    TimeoutError(String),
    /// The proxy URL could not be parsed.
    #[error("Invalid proxy URL: {0}")]
    InvalidProxy(String),
    /// The underlying client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuildError(String),
}

impl From<reqwest::Error> for HttpClientError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::TimeoutError(source.to_string())
        } else if source.is_builder() {
            Self::ClientBuildError(source.to_string())
        } else {
            Self::Error(source.to_string())
        }
    }
}

impl From<http::Error> for HttpClientError {
    fn from(source: http::Error) -> Self {
        Self::Error(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_display_variants() {
        assert_eq!(
            HttpClientError::Error("connection reset".to_string()).to_string(),
            "HTTP error occurred: connection reset"
        );
        assert_eq!(
            HttpClientError::TimeoutError("30s".to_string()).to_string(),
            "HTTP request timed out: 30s"
        );
        assert_eq!(
            HttpClientError::InvalidProxy("bad://".to_string()).to_string(),
            "Invalid proxy URL: bad://"
        );
    }
}
