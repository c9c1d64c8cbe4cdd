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

//! Concurrency tests for the raw client against an in-memory transport.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use aws_lc_rs::hmac;
use bytes::Bytes;
use nautilus_binance::{config::BinanceHttpClientConfig, http::BinanceRawHttpClient};
use nautilus_network::http::{
    HttpClientError, HttpRequest, HttpResponse, HttpStatus, HttpTransport, Method, StatusCode,
};
use rstest::rstest;

const TEST_API_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
const CALLS: u64 = 100;

/// Records every request and reports a distinct used weight on each response.
#[derive(Debug, Default)]
struct CountingTransport {
    counter: AtomicU64,
    requests: Mutex<Vec<HttpRequest>>,
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.lock().unwrap().push(request);
        tokio::task::yield_now().await;

        let headers = format!("x-mbx-used-weight-1m: {n}\r\nx-mbx-order-count-10s: {n}\r\n");
        Ok(HttpResponse {
            status: HttpStatus::new(StatusCode::OK),
            headers: Bytes::from(headers),
            body: Bytes::from_static(b"{}"),
        })
    }
}

fn reference_signature(unsigned: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, TEST_API_SECRET.as_bytes());
    hex::encode(hmac::sign(&key, unsigned.as_bytes()).as_ref())
}

fn client_with(transport: Arc<CountingTransport>) -> BinanceRawHttpClient {
    let config = BinanceHttpClientConfig {
        base_url_http: Some("http://mock".to_string()),
        ..Default::default()
    }
    .with_credentials("test_api_key", TEST_API_SECRET);
    BinanceRawHttpClient::with_transport(&config, transport).unwrap()
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_signed_calls_produce_valid_signatures() {
    let transport = Arc::new(CountingTransport::default());
    let client = client_with(transport.clone());

    let handles: Vec<_> = (0..CALLS)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let params = [("symbol", format!("SYM{i}")), ("orderId", i.to_string())];
                client
                    .execute(Method::GET, "/api/v3/order", Some(&params), true, false)
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len() as u64, CALLS);

    let mut symbols: Vec<String> = requests
        .iter()
        .map(|request| {
            let query = request.query().unwrap();
            let (unsigned, signature) = query.rsplit_once("&signature=").unwrap();
            assert_eq!(signature, reference_signature(unsigned), "{query}");
            unsigned
                .split('&')
                .find_map(|pair| pair.strip_prefix("symbol="))
                .unwrap()
                .to_string()
        })
        .collect();
    symbols.sort();
    symbols.dedup();
    assert_eq!(symbols.len() as u64, CALLS);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_usage_updates_keep_a_written_value() {
    let transport = Arc::new(CountingTransport::default());
    let client = client_with(transport);

    let handles: Vec<_> = (0..CALLS)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .execute::<()>(Method::GET, "/api/v3/time", None, false, false)
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let usage = client.usage();
    let weight = usage.used_weight_for("1m").unwrap();
    let orders = usage.order_count_for("10s").unwrap();

    assert!((1..=CALLS).contains(&weight));
    assert!((1..=CALLS).contains(&orders));
    assert_eq!(usage.used_weight().len(), 1);
    assert_eq!(usage.order_count().len(), 1);
}
