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

//! Concurrent storage of the latest Binance throttling metrics.

use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use dashmap::DashMap;
use ustr::Ustr;

/// Latest request weight, order count and retry-after values reported by Binance.
///
/// Each metric is keyed by its interval label (e.g. `1m`, `10s`, `1d`) and holds
/// the most recently stored value for that interval. Reads return copies, the
/// live maps are never exposed. Safe to share between any number of tasks.
#[derive(Debug, Default)]
pub struct BinanceRateLimitUsage {
    used_weight: DashMap<Ustr, u64>,
    order_count: DashMap<Ustr, u64>,
    retry_after_secs: AtomicU64,
}

impl BinanceRateLimitUsage {
    /// Creates a new empty [`BinanceRateLimitUsage`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the used request weight for `interval`.
    pub fn update_used_weight(&self, interval: &str, value: u64) {
        self.used_weight.insert(Ustr::from(interval), value);
    }

    /// Stores the order count for `interval`.
    pub fn update_order_count(&self, interval: &str, value: u64) {
        self.order_count.insert(Ustr::from(interval), value);
    }

    /// Stores the latest retry-after hint in seconds.
    pub fn set_retry_after_secs(&self, secs: u64) {
        self.retry_after_secs.store(secs, Ordering::Release);
    }

    /// Returns a snapshot of used request weight per interval.
    #[must_use]
    pub fn used_weight(&self) -> AHashMap<Ustr, u64> {
        Self::snapshot(&self.used_weight)
    }

    /// Returns a snapshot of order counts per interval.
    #[must_use]
    pub fn order_count(&self) -> AHashMap<Ustr, u64> {
        Self::snapshot(&self.order_count)
    }

    /// Returns the used request weight for a single interval.
    #[must_use]
    pub fn used_weight_for(&self, interval: &str) -> Option<u64> {
        self.used_weight.get(&Ustr::from(interval)).map(|v| *v)
    }

    /// Returns the order count for a single interval.
    #[must_use]
    pub fn order_count_for(&self, interval: &str) -> Option<u64> {
        self.order_count.get(&Ustr::from(interval)).map(|v| *v)
    }

    /// Returns the latest retry-after hint in seconds (0 if never observed).
    #[must_use]
    pub fn retry_after_secs(&self) -> u64 {
        self.retry_after_secs.load(Ordering::Acquire)
    }

    fn snapshot(map: &DashMap<Ustr, u64>) -> AHashMap<Ustr, u64> {
        map.iter().map(|entry| (*entry.key(), *entry.value())).collect()
    }
}
