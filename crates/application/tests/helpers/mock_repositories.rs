#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use ferrous_backend_application::ports::{
    CacheStore, QueryRepository, RecordRepository, SuffixListFetcher, SuffixLookup,
    TldRepository, ZoneRepository,
};
use ferrous_backend_application::services::SuffixResolver;
use ferrous_backend_domain::{DomainError, Query, RecordFilter, Zone, ZoneRecord};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockZoneRepository {
    zones: Arc<RwLock<Vec<Zone>>>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_zones(zones: Vec<Zone>) -> Self {
        let repo = Self::new();
        *repo.zones.write().await = zones;
        repo
    }

    pub async fn add_zone(&self, zone: Zone) {
        self.zones.write().await.push(zone);
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn find_active_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let name = name.trim().to_lowercase();
        Ok(self
            .zones
            .read()
            .await
            .iter()
            .find(|z| z.is_active && *z.name == name)
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<ZoneRecord>>>,
    filters: Arc<RwLock<Vec<RecordFilter>>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<ZoneRecord>) -> Self {
        let repo = Self::new();
        *repo.records.write().await = records;
        repo
    }

    pub async fn seen_filters(&self) -> Vec<RecordFilter> {
        self.filters.read().await.clone()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find_all(&self, filter: &RecordFilter) -> Result<Vec<ZoneRecord>, DomainError> {
        self.filters.write().await.push(filter.clone());

        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.domain_id == filter.domain_id)
            .filter(|r| !filter.active || r.is_active)
            .filter(|r| filter.host.as_deref().map_or(true, |h| r.host == h))
            .filter(|r| {
                filter
                    .record_type
                    .as_deref()
                    .map_or(true, |t| r.record_type.eq_ignore_ascii_case(t))
            })
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct MockQueryRepository {
    saved: Arc<RwLock<Vec<Query>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockQueryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn saved(&self) -> Vec<Query> {
        self.saved.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.saved.read().await.len()
    }
}

#[async_trait]
impl QueryRepository for MockQueryRepository {
    async fn save(&self, query: &mut Query) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }

        let mut saved = self.saved.write().await;
        query.id = Some(saved.len() as i64 + 1);
        saved.push(query.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockTldRepository {
    tlds: Arc<RwLock<HashSet<String>>>,
}

impl MockTldRepository {
    pub async fn with_tlds(tlds: &[&str]) -> Self {
        let repo = Self::default();
        repo.tlds
            .write()
            .await
            .extend(tlds.iter().map(|t| t.to_string()));
        repo
    }
}

#[async_trait]
impl TldRepository for MockTldRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.tlds.read().await.contains(name))
    }
}

/// Fixed suffix set for resolver tests.
pub struct StaticSuffixLookup {
    suffixes: HashSet<String>,
}

impl StaticSuffixLookup {
    pub fn new(suffixes: &[&str]) -> Self {
        Self {
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn common() -> Self {
        Self::new(&["com", "net", "org", "uk", "co.uk", "io"])
    }
}

#[async_trait]
impl SuffixLookup for StaticSuffixLookup {
    async fn is_public_suffix(&self, suffix: &str) -> Result<bool, DomainError> {
        Ok(self.suffixes.contains(suffix))
    }
}

#[derive(Clone, Default)]
pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    expired: Arc<RwLock<HashSet<String>>>,
    writes: Arc<AtomicUsize>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    /// The next read of `key` reports expiry; a write clears it.
    pub async fn expire(&self, key: &str) {
        self.expired.write().await.insert(key.to_string());
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn read(&self, key: &str) -> Result<String, DomainError> {
        if self.expired.read().await.contains(key) {
            return Err(DomainError::CacheExpired(key.to_string()));
        }
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::CacheError(format!("missing entry {}", key)))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.expired.write().await.remove(key);
        self.insert(key, value).await;
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockSuffixListFetcher {
    body: Arc<RwLock<Result<String, DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockSuffixListFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            body: Arc::new(RwLock::new(Ok(body.to_string()))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: Arc::new(RwLock::new(Err(DomainError::SuffixListFetchError(
                "connection refused".to_string(),
            )))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuffixListFetcher for MockSuffixListFetcher {
    async fn fetch(&self) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body.read().await.clone()
    }
}

pub fn resolver() -> Arc<SuffixResolver> {
    Arc::new(SuffixResolver::new(Arc::new(StaticSuffixLookup::common())))
}

pub fn zone(id: i64, name: &str) -> Zone {
    Zone::new(
        id,
        name,
        vec!["ns1.example.net".to_string(), "ns2.example.net".to_string()],
        2024010101,
        7,
    )
}

pub fn record(id: i64, domain_id: i64, host: &str, record_type: &str, target: &str) -> ZoneRecord {
    ZoneRecord::new(id, domain_id, host, record_type, target, 300)
}
