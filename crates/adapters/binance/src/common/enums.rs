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

//! Binance enumeration types for environments and stream parameters.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Binance environment type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinanceEnvironment {
    /// Production/mainnet environment.
    #[default]
    Mainnet,
    /// Testnet environment.
    Testnet,
}

/// Kline/candlestick interval.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum BinanceKlineInterval {
    #[strum(serialize = "1s")]
    #[serde(rename = "1s")]
    Second1,
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    Minute1,
    #[strum(serialize = "3m")]
    #[serde(rename = "3m")]
    Minute3,
    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    Minute5,
    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    Minute15,
    #[strum(serialize = "30m")]
    #[serde(rename = "30m")]
    Minute30,
    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    Hour1,
    #[strum(serialize = "2h")]
    #[serde(rename = "2h")]
    Hour2,
    #[strum(serialize = "4h")]
    #[serde(rename = "4h")]
    Hour4,
    #[strum(serialize = "6h")]
    #[serde(rename = "6h")]
    Hour6,
    #[strum(serialize = "8h")]
    #[serde(rename = "8h")]
    Hour8,
    #[strum(serialize = "12h")]
    #[serde(rename = "12h")]
    Hour12,
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    Day1,
    #[strum(serialize = "3d")]
    #[serde(rename = "3d")]
    Day3,
    #[strum(serialize = "1w")]
    #[serde(rename = "1w")]
    Week1,
    #[strum(serialize = "1M")]
    #[serde(rename = "1M")]
    Month1,
}

/// Push frequency of diff and partial depth streams.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, AsRefStr, EnumIter, Serialize, Deserialize,
)]
pub enum BinanceDepthUpdateSpeed {
    /// Venue default of one update per second (no suffix).
    #[default]
    #[strum(serialize = "")]
    Ms1000,
    /// One update every 100 milliseconds.
    #[strum(serialize = "@100ms")]
    Ms100,
}

/// Number of levels pushed by a partial book depth stream.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum BinanceDepthLevel {
    #[strum(serialize = "5")]
    Levels5,
    #[strum(serialize = "10")]
    Levels10,
    #[strum(serialize = "20")]
    Levels20,
}
