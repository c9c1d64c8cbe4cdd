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

//! URL resolution helpers for Binance API endpoints.

use super::{
    consts::{
        BINANCE_SPOT_HTTP_URL, BINANCE_SPOT_TESTNET_HTTP_URL, BINANCE_SPOT_TESTNET_WS_URL,
        BINANCE_SPOT_WS_URL,
    },
    enums::BinanceEnvironment,
};

/// Returns the HTTP base URL for the given environment.
#[must_use]
pub const fn get_http_base_url(environment: BinanceEnvironment) -> &'static str {
    match environment {
        BinanceEnvironment::Mainnet => BINANCE_SPOT_HTTP_URL,
        BinanceEnvironment::Testnet => BINANCE_SPOT_TESTNET_HTTP_URL,
    }
}

/// Returns the WebSocket base URL for the given environment.
#[must_use]
pub const fn get_ws_base_url(environment: BinanceEnvironment) -> &'static str {
    match environment {
        BinanceEnvironment::Mainnet => BINANCE_SPOT_WS_URL,
        BinanceEnvironment::Testnet => BINANCE_SPOT_TESTNET_WS_URL,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(BinanceEnvironment::Mainnet, "https://api.binance.com")]
    #[case(BinanceEnvironment::Testnet, "https://testnet.binance.vision")]
    fn test_http_base_url(#[case] environment: BinanceEnvironment, #[case] expected: &str) {
        assert_eq!(get_http_base_url(environment), expected);
    }

    #[rstest]
    #[case(BinanceEnvironment::Mainnet, "wss://stream.binance.com:9443/ws")]
    #[case(BinanceEnvironment::Testnet, "wss://testnet.binance.vision/ws")]
    fn test_ws_base_url(#[case] environment: BinanceEnvironment, #[case] expected: &str) {
        assert_eq!(get_ws_base_url(environment), expected);
    }
}
