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

//! Canonical parameter encoding and query parameter structs for the Binance REST API.

use serde::{Deserialize, Serialize};

use super::error::{BinanceHttpError, BinanceHttpResult};

/// Encodes `params` as `application/x-www-form-urlencoded` with keys in ascending order.
///
/// Any [`Serialize`] value that maps to flat key/value pairs is accepted: structs,
/// maps and slices of pairs whose values are scalars. `None` fields are omitted.
/// Repeated keys keep their relative order. The same input always produces the
/// same bytes, which keeps signatures reproducible.
///
/// # Errors
///
/// Returns [`BinanceHttpError::EncodingError`] if a value cannot be represented
/// (e.g. a nested sequence or struct).
pub fn encode_params<P>(params: &P) -> BinanceHttpResult<String>
where
    P: Serialize + ?Sized,
{
    let encoded = serde_urlencoded::to_string(params)
        .map_err(|e| BinanceHttpError::EncodingError(e.to_string()))?;

    if encoded.is_empty() {
        return Ok(encoded);
    }

    let mut pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded)
        .map_err(|e| BinanceHttpError::EncodingError(e.to_string()))?;
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    serde_urlencoded::to_string(&pairs).map_err(|e| BinanceHttpError::EncodingError(e.to_string()))
}

/// Parameters identifying a user data stream session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceListenKeyParams {
    pub listen_key: String,
}

impl BinanceListenKeyParams {
    #[must_use]
    pub fn new(listen_key: impl Into<String>) -> Self {
        Self {
            listen_key: listen_key.into(),
        }
    }
}
