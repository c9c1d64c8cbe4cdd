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

//! The transport seam between venue clients and the wire.

use std::fmt::Debug;

use async_trait::async_trait;

use super::{HttpClientError, HttpRequest, HttpResponse};

/// Executes a single HTTP request and returns the raw response.
///
/// Implementations must not retry; retry policy belongs to the caller. The
/// default implementation is [`HttpClient`](super::HttpClient), tests inject
/// their own.
#[async_trait]
pub trait HttpTransport: Debug + Send + Sync {
    /// Sends `request` and returns the status, raw header block and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the response cannot be read.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError>;
}
