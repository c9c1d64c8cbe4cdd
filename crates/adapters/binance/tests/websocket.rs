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

//! Integration tests for stream connections against a mock Axum WebSocket server.

use std::{net::SocketAddr, time::Duration};

use axum::{
    Router,
    extract::{
        Path,
        ws::{Message, WebSocketUpgrade},
    },
    response::IntoResponse,
    routing::get,
};
use nautilus_binance::websocket::{BinanceStreamFactory, BinanceStreamKind, BinanceWsError};
use rstest::rstest;

const LISTEN_KEY: &str = "pqia91ma19a5s61cv6a81va65sdf19v8a65a1a5s61cv6a81va65sdf19v8a65a1";

async fn handle_stream(Path(stream): Path<String>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |mut socket| async move {
        if stream == LISTEN_KEY {
            tokio::time::sleep(Duration::from_millis(1_500)).await;
        }

        if socket.send(Message::Text(stream.clone().into())).await.is_err() {
            return;
        }

        if stream.ends_with("@trade") {
            let _ = socket.send(Message::Close(None)).await;
            return;
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
    })
}

async fn start_test_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test server");
    let addr = listener.local_addr().expect("missing local addr");
    let router = Router::new().route("/ws/{stream}", get(handle_stream));

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .expect("test server failed");
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

fn factory(addr: SocketAddr) -> BinanceStreamFactory {
    BinanceStreamFactory::with_base_url(format!("ws://{addr}/ws"), Duration::from_secs(1))
}

#[rstest]
#[tokio::test]
async fn test_market_stream_read_timeout() {
    let addr = start_test_server().await;

    let mut connection = factory(addr)
        .connect("BTCUSDT", &BinanceStreamKind::BookTicker)
        .await
        .unwrap();

    let first = connection.next_message().await.unwrap().unwrap();
    let second = connection.next_message().await;

    assert_eq!(connection.read_timeout(), Some(Duration::from_secs(1)));
    assert_eq!(&first[..], b"btcusdt@bookTicker");
    assert!(matches!(second, Err(BinanceWsError::Timeout(_))));
}

#[rstest]
#[tokio::test]
async fn test_server_close_ends_stream() {
    let addr = start_test_server().await;

    let mut connection = factory(addr)
        .connect("ETHUSDT", &BinanceStreamKind::Trade)
        .await
        .unwrap();

    let first = connection.next_message().await.unwrap();
    let second = connection.next_message().await.unwrap();

    assert_eq!(first.as_deref(), Some(&b"ethusdt@trade"[..]));
    assert!(second.is_none());
}

#[rstest]
#[tokio::test]
async fn test_user_data_stream_waits_past_read_timeout() {
    let addr = start_test_server().await;
    let kind = BinanceStreamKind::UserData {
        listen_key: LISTEN_KEY.to_string(),
    };

    let mut connection = factory(addr).connect("", &kind).await.unwrap();
    let message = connection.next_message().await.unwrap().unwrap();

    assert_eq!(connection.read_timeout(), None);
    assert_eq!(&message[..], LISTEN_KEY.as_bytes());
    connection.close().await.unwrap();
}

#[rstest]
#[tokio::test]
async fn test_connect_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = factory(addr)
        .connect("BTCUSDT", &BinanceStreamKind::AggTrade)
        .await;

    assert!(matches!(result, Err(BinanceWsError::ConnectionError(_))));
}
