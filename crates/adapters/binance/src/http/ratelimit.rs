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

//! Extraction of Binance throttling metrics from a raw response header block.
//!
//! Binance reports request weight and order counts on every response through
//! headers such as `X-Mbx-Used-Weight-1m: 1200` and `X-Mbx-Order-Count-10s: 3`,
//! plus `Retry-After` on 418/429 responses. These functions scan the raw
//! `name: value\r\n` block in place instead of building a header map.

use memchr::memchr;

/// Iterator over the values of every header line whose name starts with a prefix.
///
/// Each item is the remainder of the line after the prefix, with the line ending
/// stripped. For `X-Mbx-Used-Weight-1m: 10` and prefix `X-Mbx-Used-Weight-` the
/// item is `1m: 10`. Names match ASCII case-insensitively.
#[derive(Clone, Debug)]
pub struct HeaderValues<'a, 'p> {
    raw: &'a [u8],
    prefix: &'p [u8],
    pos: usize,
}

impl<'a, 'p> HeaderValues<'a, 'p> {
    #[must_use]
    pub const fn new(raw: &'a [u8], prefix: &'p [u8]) -> Self {
        Self { raw, prefix, pos: 0 }
    }
}

impl<'a> Iterator for HeaderValues<'a, '_> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.raw.len() {
            let rest = &self.raw[self.pos..];
            let line_len = memchr(b'\n', rest).unwrap_or(rest.len());
            let mut line = &rest[..line_len];
            self.pos += line_len + 1;

            if let [head @ .., b'\r'] = line {
                line = head;
            }

            if line.len() >= self.prefix.len()
                && line[..self.prefix.len()].eq_ignore_ascii_case(self.prefix)
            {
                return Some(&line[self.prefix.len()..]);
            }
        }
        None
    }
}

/// Returns an iterator over every header value matching `prefix` in `raw`.
#[must_use]
pub const fn header_values<'a, 'p>(raw: &'a [u8], prefix: &'p [u8]) -> HeaderValues<'a, 'p> {
    HeaderValues::new(raw, prefix)
}

/// Returns the value of the first header line matching `prefix` in `raw`.
#[must_use]
pub fn find_header<'a>(raw: &'a [u8], prefix: &[u8]) -> Option<&'a [u8]> {
    header_values(raw, prefix).next()
}

/// Parses an interval metric value such as `1m: 1200` into `("1m", 1200)`.
///
/// The label is the run of ASCII alphanumerics before the first separator (`:` or
/// space) and must end in a unit letter. Any run of separators may follow, then an
/// unsigned integer. Returns `None` for anything else.
#[must_use]
pub fn parse_interval(value: &[u8]) -> Option<(&str, u64)> {
    let mut label_end = None;

    for (i, &byte) in value.iter().enumerate() {
        match byte {
            b':' | b' ' => {
                label_end = Some(i);
                break;
            }
            b if b.is_ascii_alphanumeric() => {}
            _ => return None,
        }
    }

    let label_end = label_end?;
    let label = &value[..label_end];
    if !label.last().is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }

    let digits = value[label_end..]
        .iter()
        .position(|b| !matches!(b, b':' | b' '))
        .map(|start| &value[label_end + start..])?;

    let amount = parse_u64(digits)?;
    let label = std::str::from_utf8(label).ok()?;

    Some((label, amount))
}

/// Parses a `Retry-After` value (the bytes after the header name) into seconds.
#[must_use]
pub fn parse_retry_after(value: &[u8]) -> Option<u64> {
    let start = value
        .iter()
        .position(|b| !matches!(b, b':' | b' ' | b'\t'))?;
    parse_u64(&value[start..])
}

fn parse_u64(bytes: &[u8]) -> Option<u64> {
    let bytes = bytes.trim_ascii_end();
    if bytes.is_empty() {
        return None;
    }

    bytes.iter().try_fold(0u64, |acc, &b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        } else {
            None
        }
    })
}
