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

//! [NautilusTrader](http://nautilustrader.io) adapter for the
//! [Binance](https://www.binance.com/) cryptocurrency exchange.
//!
//! The `nautilus-binance` crate provides the signed REST request pipeline and the stream
//! endpoint factory for the **Binance Spot API**:
//!
//! - [`http::BinanceRawHttpClient`]: canonical parameter encoding, HMAC SHA256 signing and
//!   request execution, recording the used weight, order count and retry-after values Binance
//!   returns on every response.
//! - [`http::BinanceHttpClient`]: typed endpoints on top of the raw client.
//! - [`websocket::BinanceStreamFactory`]: market and user data stream endpoints and connections.
//!
//! The official Binance API reference can be found at <https://developers.binance.com/docs/binance-spot-api-docs>.
//!
//! # Documentation
//!
//! See <https://docs.rs/nautilus-binance> for the latest API documentation.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;
pub mod websocket;
