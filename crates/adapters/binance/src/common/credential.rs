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

//! Binance API credential handling and request signing.

use std::fmt::Debug;

use aws_lc_rs::hmac;
use ustr::Ustr;
use zeroize::Zeroize;

/// Binance API credentials for signing requests.
///
/// The secret is wrapped into an HMAC SHA256 key once at construction and the raw
/// bytes are wiped. Every signature runs its own HMAC context derived from that
/// key, so a single [`Credential`] can sign from any number of tasks at once.
pub struct Credential {
    api_key: Ustr,
    key: hmac::Key,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credential))
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Credential {
    /// Creates a new [`Credential`] instance.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let mut api_secret = api_secret.into();

        let key = hmac::Key::new(hmac::HMAC_SHA256, api_secret.as_bytes());
        api_secret.zeroize();

        Self {
            api_key: Ustr::from(api_key.as_str()),
            key,
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }

    /// Signs a message with HMAC SHA256 and returns a lowercase hex digest.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> String {
        let tag = hmac::sign(&self.key, message);
        hex::encode(tag.as_ref())
    }

    /// Appends `timestamp`, `recvWindow` and the signature over everything before it
    /// to an already encoded `payload`.
    ///
    /// The resulting payload has the form
    /// `<params>&timestamp=<ms>&recvWindow=<ms>&signature=<hex>`, where the signature
    /// covers exactly the bytes preceding `&signature=`.
    pub fn sign_payload(&self, payload: &mut String, timestamp_ms: u64, recv_window_ms: u64) {
        let mut buf = itoa::Buffer::new();

        if !payload.is_empty() {
            payload.push('&');
        }
        payload.push_str("timestamp=");
        payload.push_str(buf.format(timestamp_ms));
        payload.push_str("&recvWindow=");
        payload.push_str(buf.format(recv_window_ms));

        let signature = self.sign(payload.as_bytes());

        payload.push_str("&signature=");
        payload.push_str(&signature);
    }
}
