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

//! Binance venue constants, endpoints and header names.

// ------------------------------------------------------------------------------------------------
// HTTP Base URLs
// ------------------------------------------------------------------------------------------------

/// Binance Spot API base URL (mainnet).
pub const BINANCE_SPOT_HTTP_URL: &str = "https://api.binance.com";

/// Binance Spot API base URL (testnet).
pub const BINANCE_SPOT_TESTNET_HTTP_URL: &str = "https://testnet.binance.vision";

// ------------------------------------------------------------------------------------------------
// WebSocket URLs
// ------------------------------------------------------------------------------------------------

/// Binance Spot WebSocket base URL (mainnet).
pub const BINANCE_SPOT_WS_URL: &str = "wss://stream.binance.com:9443/ws";

/// Binance Spot WebSocket base URL (testnet).
pub const BINANCE_SPOT_TESTNET_WS_URL: &str = "wss://testnet.binance.vision/ws";

// ------------------------------------------------------------------------------------------------
// REST endpoints
// ------------------------------------------------------------------------------------------------

pub const BINANCE_PING_PATH: &str = "/api/v3/ping";
pub const BINANCE_TIME_PATH: &str = "/api/v3/time";
pub const BINANCE_ACCOUNT_PATH: &str = "/api/v3/account";
pub const BINANCE_USER_DATA_STREAM_PATH: &str = "/api/v3/userDataStream";

// ------------------------------------------------------------------------------------------------
// Headers
// ------------------------------------------------------------------------------------------------

/// Header carrying the API key on signed and user data stream requests (`X-MBX-APIKEY`).
///
/// Kept lower-case so it can be used with [`http::HeaderName::from_static`].
pub const BINANCE_API_KEY_HEADER: &str = "x-mbx-apikey";

/// Prefix of the per-interval request weight headers, e.g. `X-Mbx-Used-Weight-1m`.
pub const BINANCE_USED_WEIGHT_HEADER: &[u8] = b"X-Mbx-Used-Weight-";

/// Prefix of the per-interval order count headers, e.g. `X-Mbx-Order-Count-10s`.
pub const BINANCE_ORDER_COUNT_HEADER: &[u8] = b"X-Mbx-Order-Count-";

/// Back-off hint in seconds sent with 418/429 responses.
pub const BINANCE_RETRY_AFTER_HEADER: &[u8] = b"Retry-After";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

pub const BINANCE_USER_AGENT: &str = concat!("nautilus-binance/", env!("CARGO_PKG_VERSION"));

// ------------------------------------------------------------------------------------------------
// Signing
// ------------------------------------------------------------------------------------------------

/// Default `recvWindow` in milliseconds.
pub const BINANCE_DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Largest `recvWindow` the venue accepts.
pub const BINANCE_MAX_RECV_WINDOW_MS: u64 = 60_000;

/// Bytes added by `&timestamp=`, `&recvWindow=` and `&signature=` with their values.
pub(crate) const BINANCE_SIGNATURE_SUFFIX_CAPACITY: usize = 116;

// ------------------------------------------------------------------------------------------------
// Streams
// ------------------------------------------------------------------------------------------------

/// Read timeout applied to market data streams.
pub const BINANCE_WS_READ_TIMEOUT_SECS: u64 = 60;
