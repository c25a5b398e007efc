// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Weak-reference caching of a large, regenerable value.

use std::sync::Arc;
use std::time::Duration;

use hourglass::Clock;
use stash::{SharedCache, WeakMemoryCache};

fn main() {
    futures::executor::block_on(async {
        let clock = Clock::new();
        let cache = WeakMemoryCache::new(clock.clone());

        let report = Arc::new(vec![0_u8; 1_000_000]);
        cache
            .put("daily-report", Arc::clone(&report), clock.now() + Duration::from_secs(3600))
            .await;

        // While the report is in use it is served from the cache.
        let served = cache.get("daily-report", Duration::ZERO).await;
        println!("while referenced: {}", served.is_some());

        // Dropping the last strong reference frees the megabyte immediately;
        // the expiry an hour out never gets a say.
        drop(report);
        drop(served);
        let gone = cache.get("daily-report", Duration::ZERO).await;
        println!("after release: {}", gone.is_none());
    });
}
