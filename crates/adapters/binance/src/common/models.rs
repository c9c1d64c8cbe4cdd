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

//! Binance response models shared across endpoints.

use serde::{Deserialize, Serialize};

/// Error payload returned by the Binance REST API on failure.
///
/// # References
/// - <https://developers.binance.com/docs/binance-spot-api-docs/errors>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinanceErrorResponse {
    /// Venue error code (negative for request errors, e.g. `-1021`).
    pub code: i64,
    /// Human readable message.
    pub msg: String,
}
