use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_EXPIRE: u32 = 604_800;
pub const DEFAULT_REFRESH: u32 = 10_800;
pub const DEFAULT_RETRY: u32 = 3_600;
pub const DEFAULT_TTL: u32 = 3_600;

/// An authoritative zone served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub name: Arc<str>,
    pub is_active: bool,
    pub is_public: bool,
    pub name_servers: Vec<String>,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub ttl: u32,
    pub user_id: i64,
}

impl Zone {
    pub fn new(id: i64, name: &str, name_servers: Vec<String>, serial: u32, user_id: i64) -> Self {
        Self {
            id,
            name: Arc::from(Self::normalize_name(name).as_str()),
            is_active: true,
            is_public: false,
            name_servers: name_servers
                .iter()
                .map(|ns| Self::normalize_name(ns))
                .collect(),
            serial,
            refresh: DEFAULT_REFRESH,
            retry: DEFAULT_RETRY,
            expire: DEFAULT_EXPIRE,
            ttl: DEFAULT_TTL,
            user_id,
        }
    }

    /// Zone names and name servers are stored lower-cased and trimmed.
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn primary_name_server(&self) -> Option<&str> {
        self.name_servers.first().map(String::as_str)
    }
}
