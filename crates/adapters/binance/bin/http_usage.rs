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

//! Demonstration binary for the Binance HTTP client and its throttling metrics.
//!
//! Run with:
//! ```bash
//! cargo run -p nautilus-binance --bin binance-http-usage
//! ```
//!
//! For the signed account request, set environment variables (or a `.env` file):
//! ```bash
//! export BINANCE_API_KEY=your_key
//! export BINANCE_API_SECRET=your_secret
//! cargo run -p nautilus-binance --bin binance-http-usage
//! ```

use nautilus_binance::{
    common::consts::BINANCE_ACCOUNT_PATH,
    config::BinanceHttpClientConfig,
    http::{BinanceHttpClient, BinanceRawHttpClient},
};
use nautilus_network::http::Method;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = BinanceHttpClientConfig::default().with_env_credentials();
    let client = BinanceHttpClient::new(&config)?;

    client.ping().await?;
    let server_time = client.server_time().await?;
    tracing::info!(server_time, "Binance server time");

    if config.has_credentials() {
        account(client.raw()).await;
    } else {
        tracing::info!("Skipping signed request (set BINANCE_API_KEY and BINANCE_API_SECRET)");
    }

    report_usage(client.raw());

    Ok(())
}

async fn account(client: &BinanceRawHttpClient) {
    match client
        .execute::<()>(Method::GET, BINANCE_ACCOUNT_PATH, None, true, false)
        .await
    {
        Ok(body) => tracing::info!(bytes = body.len(), "Account response received"),
        Err(e) => tracing::error!(code = ?e.code(), "Account request failed: {e}"),
    }
}

fn report_usage(client: &BinanceRawHttpClient) {
    for (interval, weight) in client.used_weight() {
        tracing::info!(%interval, weight, "Used weight");
    }
    for (interval, count) in client.order_count() {
        tracing::info!(%interval, count, "Order count");
    }
    tracing::info!(retry_after_secs = client.retry_after_secs(), "Retry after");
}
