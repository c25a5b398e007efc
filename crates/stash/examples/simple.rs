// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A traced in-memory cache serving short-lived tokens.

use std::time::Duration;

use hourglass::Clock;
use stash::{Cache, CacheExt, InMemoryCache};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    futures::executor::block_on(async {
        let clock = Clock::new();
        let cache = InMemoryCache::new(clock.clone()).traced("tokens");

        cache
            .put("session-1", "a-token".to_owned(), clock.now() + Duration::from_secs(300))
            .await;

        // Accept the token only if it stays valid for another minute.
        match cache.get("session-1", Duration::from_secs(60)).await {
            Some(token) => println!("token: {token}"),
            None => println!("token expired or missing, fetch a new one"),
        }

        cache.delete("session-1").await;
        assert!(cache.get("session-1", Duration::ZERO).await.is_none());
    });
}
