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

//! Stream selection and endpoint construction for Binance market and user data streams.

use std::time::Duration;

use super::{
    client::BinanceStreamConnection,
    error::{BinanceWsError, BinanceWsResult},
};
use crate::{
    common::enums::{BinanceDepthLevel, BinanceDepthUpdateSpeed, BinanceKlineInterval},
    config::BinanceStreamConfig,
};

/// Class of push channel to open.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinanceStreamKind {
    /// Diff depth updates for a symbol: `<symbol>@depth[@100ms]`.
    Depth { speed: BinanceDepthUpdateSpeed },
    /// Partial book depth for a symbol: `<symbol>@depth<levels>[@100ms]`.
    DepthLevel {
        level: BinanceDepthLevel,
        speed: BinanceDepthUpdateSpeed,
    },
    /// 24hr rolling tickers for all symbols: `!ticker@arr`.
    AllMarketTickers,
    /// 24hr rolling ticker for a symbol: `<symbol>@ticker`.
    Ticker,
    /// 24hr mini tickers for all symbols: `!miniTicker@arr`.
    AllMarketMiniTickers,
    /// 24hr mini ticker for a symbol: `<symbol>@miniTicker`.
    MiniTicker,
    /// Best bid/ask for all symbols: `!bookTicker`.
    AllBookTickers,
    /// Best bid/ask for a symbol: `<symbol>@bookTicker`.
    BookTicker,
    /// Klines for a symbol: `<symbol>@kline_<interval>`.
    Kline { interval: BinanceKlineInterval },
    /// Aggregate trades for a symbol: `<symbol>@aggTrade`.
    AggTrade,
    /// Raw trades for a symbol: `<symbol>@trade`.
    Trade,
    /// Account updates for the user data stream identified by `listen_key`.
    UserData { listen_key: String },
}

impl BinanceStreamKind {
    /// Returns `true` if the stream is scoped to a single symbol.
    #[must_use]
    pub const fn is_per_symbol(&self) -> bool {
        !matches!(
            self,
            Self::AllMarketTickers
                | Self::AllMarketMiniTickers
                | Self::AllBookTickers
                | Self::UserData { .. }
        )
    }

    /// Returns `true` for the long lived user data channel.
    #[must_use]
    pub const fn is_user_data(&self) -> bool {
        matches!(self, Self::UserData { .. })
    }

    fn write_path(&self, symbol: &str, out: &mut String) {
        if self.is_per_symbol() {
            out.extend(symbol.chars().flat_map(char::to_lowercase));
        }

        match self {
            Self::Depth { speed } => {
                out.push_str("@depth");
                out.push_str(speed.as_ref());
            }
            Self::DepthLevel { level, speed } => {
                out.push_str("@depth");
                out.push_str(level.as_ref());
                out.push_str(speed.as_ref());
            }
            Self::AllMarketTickers => out.push_str("!ticker@arr"),
            Self::Ticker => out.push_str("@ticker"),
            Self::AllMarketMiniTickers => out.push_str("!miniTicker@arr"),
            Self::MiniTicker => out.push_str("@miniTicker"),
            Self::AllBookTickers => out.push_str("!bookTicker"),
            Self::BookTicker => out.push_str("@bookTicker"),
            Self::Kline { interval } => {
                out.push_str("@kline_");
                out.push_str(interval.as_ref());
            }
            Self::AggTrade => out.push_str("@aggTrade"),
            Self::Trade => out.push_str("@trade"),
            Self::UserData { listen_key } => out.push_str(listen_key),
        }
    }
}

/// A fully qualified stream URL with the read timeout to apply on its connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinanceStreamEndpoint {
    /// Stream URL.
    pub url: String,
    /// Maximum wait for the next message, `None` for user data streams.
    pub read_timeout: Option<Duration>,
}

/// Builds stream endpoints from a base URL and opens connections to them.
#[derive(Clone, Debug)]
pub struct BinanceStreamFactory {
    base_url: String,
    read_timeout: Duration,
}

impl Default for BinanceStreamFactory {
    fn default() -> Self {
        Self::new(&BinanceStreamConfig::default())
    }
}

impl BinanceStreamFactory {
    /// Creates a new [`BinanceStreamFactory`] from `config`.
    #[must_use]
    pub fn new(config: &BinanceStreamConfig) -> Self {
        Self::with_base_url(
            config.ws_url(),
            Duration::from_secs(config.read_timeout_secs),
        )
    }

    /// Creates a new [`BinanceStreamFactory`] for a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, read_timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            base_url,
            read_timeout,
        }
    }

    /// Returns the base URL (always ending in `/`).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the endpoint for `kind`.
    ///
    /// `symbol` is lower-cased and ignored by all-market and user data streams.
    ///
    /// # Errors
    ///
    /// Returns an error if a per-symbol stream has an empty symbol or the listen key is empty.
    pub fn endpoint(
        &self,
        symbol: &str,
        kind: &BinanceStreamKind,
    ) -> BinanceWsResult<BinanceStreamEndpoint> {
        if kind.is_per_symbol() && symbol.is_empty() {
            return Err(BinanceWsError::InvalidStream(format!(
                "{kind:?} requires a symbol"
            )));
        }

        if let BinanceStreamKind::UserData { listen_key } = kind
            && listen_key.is_empty()
        {
            return Err(BinanceWsError::InvalidStream(
                "Listen key is empty".to_string(),
            ));
        }

        let mut url = String::with_capacity(self.base_url.len() + symbol.len() + 32);
        url.push_str(&self.base_url);
        kind.write_path(symbol, &mut url);

        let read_timeout = if kind.is_user_data() {
            None
        } else {
            Some(self.read_timeout)
        };

        Ok(BinanceStreamEndpoint { url, read_timeout })
    }

    /// Opens a connection to the endpoint for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the connection cannot be established.
    pub async fn connect(
        &self,
        symbol: &str,
        kind: &BinanceStreamKind,
    ) -> BinanceWsResult<BinanceStreamConnection> {
        let endpoint = self.endpoint(symbol, kind)?;
        BinanceStreamConnection::connect(endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn factory() -> BinanceStreamFactory {
        BinanceStreamFactory::with_base_url("wss://stream.binance.com:9443/ws", Duration::from_secs(60))
    }

    #[rstest]
    #[case(BinanceStreamKind::Depth { speed: BinanceDepthUpdateSpeed::Ms1000 }, "bnbbtc@depth")]
    #[case(BinanceStreamKind::Depth { speed: BinanceDepthUpdateSpeed::Ms100 }, "bnbbtc@depth@100ms")]
    #[case(
        BinanceStreamKind::DepthLevel { level: BinanceDepthLevel::Levels10, speed: BinanceDepthUpdateSpeed::Ms100 },
        "bnbbtc@depth10@100ms"
    )]
    #[case(BinanceStreamKind::AllMarketTickers, "!ticker@arr")]
    #[case(BinanceStreamKind::Ticker, "bnbbtc@ticker")]
    #[case(BinanceStreamKind::AllMarketMiniTickers, "!miniTicker@arr")]
    #[case(BinanceStreamKind::MiniTicker, "bnbbtc@miniTicker")]
    #[case(BinanceStreamKind::AllBookTickers, "!bookTicker")]
    #[case(BinanceStreamKind::BookTicker, "bnbbtc@bookTicker")]
    #[case(BinanceStreamKind::Kline { interval: BinanceKlineInterval::Minute1 }, "bnbbtc@kline_1m")]
    #[case(BinanceStreamKind::AggTrade, "bnbbtc@aggTrade")]
    #[case(BinanceStreamKind::Trade, "bnbbtc@trade")]
    fn test_market_endpoints(#[case] kind: BinanceStreamKind, #[case] path: &str) {
        let endpoint = factory().endpoint("BNBBTC", &kind).unwrap();

        assert_eq!(endpoint.url, format!("wss://stream.binance.com:9443/ws/{path}"));
        assert_eq!(endpoint.read_timeout, Some(Duration::from_secs(60)));
    }

    #[rstest]
    fn test_user_data_endpoint_has_no_read_timeout() {
        let kind = BinanceStreamKind::UserData {
            listen_key: "pqia91ma19a5s61cv6a81va65sdf19v8a65a1a5s61cv6a81va65sdf19v8a65a1".to_string(),
        };

        let endpoint = factory().endpoint("", &kind).unwrap();

        assert_eq!(
            endpoint.url,
            "wss://stream.binance.com:9443/ws/pqia91ma19a5s61cv6a81va65sdf19v8a65a1a5s61cv6a81va65sdf19v8a65a1"
        );
        assert_eq!(endpoint.read_timeout, None);
    }

    #[rstest]
    fn test_all_market_stream_ignores_symbol() {
        let endpoint = factory()
            .endpoint("BNBBTC", &BinanceStreamKind::AllBookTickers)
            .unwrap();

        assert_eq!(endpoint.url, "wss://stream.binance.com:9443/ws/!bookTicker");
    }

    #[rstest]
    #[case(BinanceStreamKind::Trade)]
    #[case(BinanceStreamKind::UserData { listen_key: String::new() })]
    fn test_invalid_streams(#[case] kind: BinanceStreamKind) {
        let result = factory().endpoint("", &kind);
        assert!(matches!(result, Err(BinanceWsError::InvalidStream(_))));
    }

    #[rstest]
    fn test_base_url_slash_not_doubled() {
        let factory =
            BinanceStreamFactory::with_base_url("ws://127.0.0.1:9000/ws/", Duration::from_secs(1));

        let endpoint = factory.endpoint("ETHUSDT", &BinanceStreamKind::Trade).unwrap();

        assert_eq!(factory.base_url(), "ws://127.0.0.1:9000/ws/");
        assert_eq!(endpoint.url, "ws://127.0.0.1:9000/ws/ethusdt@trade");
    }

    #[rstest]
    fn test_default_factory_uses_mainnet() {
        assert_eq!(
            BinanceStreamFactory::default().base_url(),
            "wss://stream.binance.com:9443/ws/"
        );
    }
}
