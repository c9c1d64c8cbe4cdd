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

//! Binance HTTP response models.

use serde::{Deserialize, Serialize};

/// Empty object returned by `GET /api/v3/ping`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinancePing {}

/// Server time returned by `GET /api/v3/time`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceServerTime {
    /// Server time in milliseconds since the UNIX epoch.
    pub server_time: i64,
}

/// Listen key returned when a user data stream is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceListenKey {
    /// Key identifying the user data stream.
    pub listen_key: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_deserialize_ping() {
        let ping: BinancePing = serde_json::from_str("{}").unwrap();
        assert_eq!(ping, BinancePing {});
    }

    #[rstest]
    fn test_deserialize_server_time() {
        let time: BinanceServerTime =
            serde_json::from_str(r#"{"serverTime":1499827319559}"#).unwrap();
        assert_eq!(time.server_time, 1_499_827_319_559);
    }

    #[rstest]
    fn test_deserialize_listen_key() {
        let json = r#"{"listenKey":"pqia91ma19a5s61cv6a81va65sdf19v8a65a1a5s61cv6a81va65sdf19v8a65a1"}"#;
        let key: BinanceListenKey = serde_json::from_str(json).unwrap();
        assert!(key.listen_key.starts_with("pqia91ma19"));
    }
}
