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

//! A single Binance stream connection.

use std::time::Duration;

use bytes::Bytes;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{self, protocol::Message},
};

use super::{
    error::{BinanceWsError, BinanceWsResult},
    streams::BinanceStreamEndpoint,
};

/// An open Binance stream.
///
/// Market data connections fail with [`BinanceWsError::Timeout`] when no data arrives within
/// the endpoint's read timeout. User data connections wait indefinitely.
#[derive(Debug)]
pub struct BinanceStreamConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    url: String,
    read_timeout: Option<Duration>,
}

impl BinanceStreamConnection {
    /// Connects to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or WebSocket handshake fails.
    pub async fn connect(endpoint: BinanceStreamEndpoint) -> BinanceWsResult<Self> {
        let BinanceStreamEndpoint { url, read_timeout } = endpoint;

        let (stream, _) = connect_async(url.as_str())
            .await
            .map_err(|e| BinanceWsError::ConnectionError(format!("{url}: {e}")))?;

        tracing::debug!(%url, ?read_timeout, "Connected Binance stream");

        Ok(Self {
            stream,
            url,
            read_timeout,
        })
    }

    /// Returns the stream URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the read timeout, `None` when disabled.
    #[must_use]
    pub const fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Waits for the next text or binary payload.
    ///
    /// Control frames are handled internally. Returns `Ok(None)` once the server closes the
    /// stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the read timeout elapses or the connection fails.
    pub async fn next_message(&mut self) -> BinanceWsResult<Option<Bytes>> {
        loop {
            let next = match self.read_timeout {
                Some(timeout) => tokio::time::timeout(timeout, self.stream.next())
                    .await
                    .map_err(|_| {
                        BinanceWsError::Timeout(format!(
                            "No message on {} within {}s",
                            self.url,
                            timeout.as_secs_f64()
                        ))
                    })?,
                None => self.stream.next().await,
            };

            match next {
                Some(Ok(Message::Text(text))) => return Ok(Some(Bytes::from(text))),
                Some(Ok(Message::Binary(data))) => return Ok(Some(data)),
                Some(Ok(Message::Close(frame))) => {
                    tracing::debug!(url = %self.url, ?frame, "Binance stream closed by server");
                    return Ok(None);
                }
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(None),
            }
        }
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the close frame cannot be sent.
    pub async fn close(mut self) -> BinanceWsResult<()> {
        match self.stream.close(None).await {
            Ok(())
            | Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
