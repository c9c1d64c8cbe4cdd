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

//! Binance WebSocket error types.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Binance WebSocket client error type.
#[derive(Debug, Clone, Error)]
pub enum BinanceWsError {
    /// The stream selection cannot form a valid endpoint.
    #[error("Invalid stream: {0}")]
    InvalidStream(String),
    /// Dialing or the WebSocket handshake failed.
    #[error("Connection error: {0}")]
    ConnectionError(String),
    /// An established connection failed while reading or writing.
    #[error("Network error: {0}")]
    NetworkError(String),
    /// No message arrived within the read timeout.
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl From<tungstenite::Error> for BinanceWsError {
    fn from(err: tungstenite::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}

/// Result type for Binance WebSocket operations.
pub type BinanceWsResult<T> = Result<T, BinanceWsError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_display() {
        let err = BinanceWsError::InvalidStream("symbol is empty".to_string());
        assert_eq!(err.to_string(), "Invalid stream: symbol is empty");
    }

    #[rstest]
    fn test_from_tungstenite_error() {
        let err: BinanceWsError = tungstenite::Error::ConnectionClosed.into();
        assert!(matches!(err, BinanceWsError::NetworkError(_)));
    }
}
