#![allow(dead_code)]
use ferrous_backend_domain::ZoneRecord;

pub struct ZoneRecordBuilder {
    id: i64,
    domain_id: i64,
    host: String,
    record_type: String,
    target: String,
    ttl: u32,
    priority: u32,
    weight: u32,
    port: u32,
    flag: u32,
    tag: Option<String>,
    is_active: bool,
}

impl ZoneRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            domain_id: 1,
            host: "@".to_string(),
            record_type: "A".to_string(),
            target: "192.0.2.1".to_string(),
            ttl: 300,
            priority: 0,
            weight: 0,
            port: 0,
            flag: 0,
            tag: None,
            is_active: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> ZoneRecord {
        let mut record = ZoneRecord::new(
            self.id,
            self.domain_id,
            self.host,
            &self.record_type,
            self.target,
            self.ttl,
        );
        record.priority = self.priority;
        record.weight = self.weight;
        record.port = self.port;
        record.flag = self.flag;
        record.tag = self.tag;
        record.is_active = self.is_active;
        record
    }
}

impl Default for ZoneRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
