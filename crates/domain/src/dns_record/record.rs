use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Host value that addresses the zone apex.
pub const APEX_HOST: &str = "@";

/// Host value that matches any label without its own records.
pub const WILDCARD_HOST: &str = "*";

/// A stored resource record of a zone.
///
/// `record_type` keeps the raw stored type string so rows with types this
/// backend does not render (e.g. `dnssec`) survive the round trip from the
/// store and are dropped only when the response is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: i64,

    pub domain_id: i64,

    pub host: String,

    pub record_type: Arc<str>,

    pub target: String,

    pub ttl: u32,

    pub priority: u32,

    pub weight: u32,

    pub port: u32,

    pub flag: u32,

    pub tag: Option<String>,

    pub is_active: bool,
}

impl ZoneRecord {
    pub fn new(
        id: i64,
        domain_id: i64,
        host: impl Into<String>,
        record_type: &str,
        target: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            id,
            domain_id,
            host: host.into(),
            record_type: Arc::from(record_type),
            target: target.into(),
            ttl,
            priority: 0,
            weight: 0,
            port: 0,
            flag: 0,
            tag: None,
            is_active: true,
        }
    }

    pub fn is_apex(&self) -> bool {
        self.host == APEX_HOST
    }

    pub fn is_wildcard(&self) -> bool {
        self.host == WILDCARD_HOST
    }

    /// Rewrites the relative host into an absolute name under `zone_name`.
    ///
    /// `@` becomes the apex. `*` becomes `requested_host` under the apex when
    /// one is known and stays a literal wildcard label otherwise.
    pub fn expand_host(&mut self, zone_name: &str, requested_host: Option<&str>) {
        self.host = if self.is_apex() {
            zone_name.to_string()
        } else if self.is_wildcard() {
            match requested_host {
                Some(host) if !host.is_empty() => format!("{}.{}", host, zone_name),
                _ => format!("{}.{}", WILDCARD_HOST, zone_name),
            }
        } else {
            format!("{}.{}", self.host, zone_name)
        };
    }
}

/// Selection criteria for [`ZoneRecord`] queries against the record store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFilter {
    pub domain_id: i64,
    pub active: bool,
    pub host: Option<String>,
    pub record_type: Option<String>,
}

impl RecordFilter {
    pub fn for_zone(domain_id: i64) -> Self {
        Self {
            domain_id,
            active: true,
            host: None,
            record_type: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into().to_lowercase());
        self
    }

    /// `ANY` (any case) leaves the type unfiltered.
    pub fn with_type(mut self, record_type: &str) -> Self {
        self.record_type = if record_type.eq_ignore_ascii_case("any") {
            None
        } else {
            Some(record_type.to_uppercase())
        };
        self
    }
}
