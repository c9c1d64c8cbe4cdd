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

//! Request and response types exchanged over an [`HttpTransport`](super::HttpTransport).

use bytes::{BufMut, Bytes, BytesMut};
use http::{HeaderMap, Method, StatusCode};

/// A fully built HTTP request targeting an absolute URL.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Creates a new [`HttpRequest`] with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Returns the query string portion of the URL, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }
}

/// Thin wrapper over [`StatusCode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HttpStatus {
    inner: StatusCode,
}

impl HttpStatus {
    #[must_use]
    pub const fn new(code: StatusCode) -> Self {
        Self { inner: code }
    }

    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.inner.as_u16()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.inner.is_success()
    }

    #[must_use]
    pub const fn inner(&self) -> StatusCode {
        self.inner
    }
}

impl From<StatusCode> for HttpStatus {
    fn from(code: StatusCode) -> Self {
        Self::new(code)
    }
}

/// The raw result of an HTTP exchange.
///
/// `headers` holds the response header block as `name: value\r\n` lines so that
/// callers interested in a handful of venue specific fields can scan the bytes
/// directly instead of materializing a map per response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: HttpStatus,
    pub headers: Bytes,
    pub body: Bytes,
}

/// Writes `headers` into `buf` as a raw `name: value\r\n` block.
///
/// Names are emitted as stored by [`HeaderMap`] (lower-case).
pub fn write_raw_headers(headers: &HeaderMap, buf: &mut BytesMut) {
    for (name, value) in headers {
        let name = name.as_str().as_bytes();
        let value = value.as_bytes();
        buf.reserve(name.len() + value.len() + 4);
        buf.put_slice(name);
        buf.put_slice(b": ");
        buf.put_slice(value);
        buf.put_slice(b"\r\n");
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_write_raw_headers_renders_lines() {
        let mut headers = HeaderMap::new();
        headers.insert("x-mbx-used-weight-1m", HeaderValue::from_static("10"));
        headers.insert("retry-after", HeaderValue::from_static("30"));

        let mut buf = BytesMut::new();
        write_raw_headers(&headers, &mut buf);
        let block = std::str::from_utf8(&buf).unwrap();

        assert!(block.contains("x-mbx-used-weight-1m: 10\r\n"));
        assert!(block.contains("retry-after: 30\r\n"));
        assert_eq!(block.matches("\r\n").count(), 2);
    }

    #[rstest]
    fn test_write_raw_headers_keeps_repeated_names() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("b=2"));

        let mut buf = BytesMut::new();
        write_raw_headers(&headers, &mut buf);

        assert_eq!(&buf[..], b"set-cookie: a=1\r\nset-cookie: b=2\r\n");
    }

    #[rstest]
    fn test_write_raw_headers_empty() {
        let mut buf = BytesMut::new();
        write_raw_headers(&HeaderMap::new(), &mut buf);
        assert!(buf.is_empty());
    }

    #[rstest]
    #[case("https://api.binance.com/api/v3/time", None)]
    #[case("https://api.binance.com/api/v3/depth?symbol=BTCUSDT", Some("symbol=BTCUSDT"))]
    fn test_request_query(#[case] url: &str, #[case] expected: Option<&str>) {
        let request = HttpRequest::new(Method::GET, url);
        assert_eq!(request.query(), expected);
    }

    #[rstest]
    fn test_http_status() {
        let status = HttpStatus::new(StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status.as_u16(), 429);
        assert!(!status.is_success());
        assert!(HttpStatus::from(StatusCode::OK).is_success());
    }
}
