use std::collections::HashMap;
use std::time::Instant;

use manazza_config::Config;
use manazza_layout::RootLayout;
use tokio::sync::Mutex;

pub struct TimedCache {
    store: HashMap<String, (Instant, String)>,
    ttl: u64,
    size: usize,
}

impl TimedCache {
    pub fn new(ttl: u64, size: usize) -> Self {
        Self { store: HashMap::new(), ttl, size }
    }

    /// Removes expired entries
    fn evict(&mut self) -> () {
        // Remove expired
        self.store.retain(|_key, (t, _val)| {
            t.elapsed().as_secs() < self.ttl
        });
        if self.store.len() > self.size {
            // Remove extra items
            let mut sorted: Vec<_> = self.store.iter()
                .map(|(key, (t, _val))| (key, t))
                .collect();
            sorted.sort_by_key(|(_key, t)| **t);
            let latest: Vec<_> = sorted.into_iter()
                .rev()
                .take(self.size)
                .map(|(key, _t)| key.clone())
                .collect();
            self.store.retain(|key, (_t, _val)| latest.contains(key));
        };
    }

    pub fn set(&mut self, key: String, val: String) -> () {
        self.store.insert(key, (Instant::now(), val));
        self.evict();
    }

    pub fn get(&mut self, key: &str) -> Option<&str> {
        self.evict();
        self.store.get(key).map(|(_t, val)| val.as_str())
    }
}

// https://actix.rs/docs/application/#shared-mutable-state
pub struct AppState {
    pub layout: RootLayout,
    // Rendered pages, by page name
    pub page_cache: Mutex<TimedCache>,
}

impl AppState {
    pub fn init(config: &Config, layout: RootLayout) -> Self {
        Self {
            layout: layout,
            page_cache: Mutex::new(TimedCache::new(
                config.page_cache_ttl,
                config.page_cache_size,
            )),
        }
    }
}
