#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_backend_application::ports::{CacheStore, SuffixListFetcher};
use ferrous_backend_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory cache whose entries never expire.
#[derive(Default)]
pub struct MockCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.lock().unwrap().contains_key(key))
    }

    async fn read(&self, key: &str) -> Result<String, DomainError> {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::CacheError(key.to_string()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct CountingFetcher {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingFetcher {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuffixListFetcher for CountingFetcher {
    async fn fetch(&self) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::SuffixListFetchError("unreachable".to_string()));
        }
        Ok("com\nnet\norg\n".to_string())
    }
}
