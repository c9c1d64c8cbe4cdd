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

//! HTTP transport machinery: a pooled client, request/response types, and the
//! [`HttpTransport`] seam that venue adapters execute requests through.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::HttpClient;
pub use error::HttpClientError;
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
pub use transport::HttpTransport;
pub use types::{HttpRequest, HttpResponse, HttpStatus, write_raw_headers};
