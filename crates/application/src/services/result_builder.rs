use super::SuffixResolver;
use ferrous_backend_domain::{
    BackendResponse, DomainError, RecordType, ResultRecord, ResultValue, Zone, ZoneRecord,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Accumulates typed answer records and a log trail for one exchange.
pub struct ResultBuilder {
    resolver: Arc<SuffixResolver>,
    hostmaster: Arc<str>,
    result: ResultValue,
    log: Vec<String>,
}

impl ResultBuilder {
    pub fn new(resolver: Arc<SuffixResolver>, hostmaster: Arc<str>) -> Self {
        Self {
            resolver,
            hostmaster,
            result: ResultValue::Flag(false),
            log: Vec::new(),
        }
    }

    fn add(&mut self, qtype: RecordType, qname: &str, ttl: u32, content: String) {
        let record = ResultRecord {
            qtype,
            qname: qname.to_string(),
            ttl,
            content,
            auth: true,
        };

        match &mut self.result {
            ResultValue::Records(records) => records.push(record),
            slot => *slot = ResultValue::Records(vec![record]),
        }
    }

    pub fn a(&mut self, qname: &str, ttl: u32, target: &str) {
        self.add(RecordType::A, qname, ttl, target.to_string());
    }

    pub fn aaaa(&mut self, qname: &str, ttl: u32, target: &str) {
        self.add(RecordType::AAAA, qname, ttl, target.to_string());
    }

    pub fn txt(&mut self, qname: &str, ttl: u32, target: &str) {
        self.add(RecordType::TXT, qname, ttl, target.to_string());
    }

    pub fn caa(&mut self, qname: &str, ttl: u32, flags: u32, tag: &str, value: &str) {
        let value = value.replace('"', "");
        let content = format!("{} {} \"{}\"", flags, tag.trim(), value.trim());
        self.add(RecordType::CAA, qname, ttl, content);
    }

    pub async fn cname(&mut self, qname: &str, ttl: u32, target: &str) -> Result<(), DomainError> {
        let target = self.normalize_target_host(target).await?;
        self.add(RecordType::CNAME, qname, ttl, target);
        Ok(())
    }

    pub async fn ns(&mut self, qname: &str, ttl: u32, target: &str) -> Result<(), DomainError> {
        let target = self.normalize_target_host(target).await?;
        self.add(RecordType::NS, qname, ttl, target);
        Ok(())
    }

    pub async fn mx(
        &mut self,
        qname: &str,
        ttl: u32,
        priority: u32,
        target: &str,
    ) -> Result<(), DomainError> {
        let target = self.normalize_target_host(target).await?;
        self.add(RecordType::MX, qname, ttl, format!("{} {}", priority, target));
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn srv(
        &mut self,
        qname: &str,
        ttl: u32,
        priority: u32,
        weight: u32,
        port: u32,
        target: &str,
    ) -> Result<(), DomainError> {
        let target = self.normalize_target_host(target).await?;
        let content = format!("{} {} {} {}", priority, weight, port, target);
        self.add(RecordType::SRV, qname, ttl, content);
        Ok(())
    }

    /// Synthesizes the zone's SOA from its metadata and primary name server.
    pub async fn soa(&mut self, zone: &Zone) -> Result<(), DomainError> {
        let primary = zone
            .primary_name_server()
            .ok_or_else(|| DomainError::ZoneWithoutNameServers(zone.name.to_string()))?;

        let name_server = self.normalize_target_host(primary).await?;
        let content = format!(
            "{} {} {} {} {} {} {}",
            name_server,
            self.hostmaster_fqdn(),
            zone.serial,
            zone.refresh,
            zone.retry,
            zone.expire,
            zone.ttl
        );

        self.add(RecordType::SOA, &zone.name, zone.ttl, content);
        Ok(())
    }

    /// Appends a stored record; unknown and DNSSEC types are skipped.
    pub async fn record(&mut self, record: &ZoneRecord) -> Result<(), DomainError> {
        let record_type = match RecordType::from_str(&record.record_type) {
            Ok(record_type) => record_type,
            Err(_) => {
                debug!(
                    record_id = record.id,
                    record_type = %record.record_type,
                    "Skipping record of unsupported type"
                );
                return Ok(());
            }
        };

        let qname = record.host.as_str();
        let ttl = record.ttl;
        let target = record.target.as_str();

        match record_type {
            RecordType::A => self.a(qname, ttl, target),
            RecordType::AAAA => self.aaaa(qname, ttl, target),
            RecordType::TXT => self.txt(qname, ttl, target),
            RecordType::CAA => match record.tag.as_deref() {
                Some(tag) if !tag.trim().is_empty() => {
                    self.caa(qname, ttl, record.flag, tag, target)
                }
                _ => debug!(record_id = record.id, "Skipping CAA record without a tag"),
            },
            RecordType::CNAME => self.cname(qname, ttl, target).await?,
            RecordType::NS => self.ns(qname, ttl, target).await?,
            RecordType::MX => self.mx(qname, ttl, record.priority, target).await?,
            RecordType::SRV => {
                self.srv(
                    qname,
                    ttl,
                    record.priority,
                    record.weight,
                    record.port,
                    target,
                )
                .await?
            }
            // Zone SOA is synthesized from zone metadata, never stored.
            RecordType::SOA => {}
        }

        Ok(())
    }

    /// Strips trailing dots; re-appends one only when the name has a registrable domain.
    pub async fn normalize_target_host(&self, host: &str) -> Result<String, DomainError> {
        let bare = host.trim().trim_end_matches('.').trim();
        let parsed = self.resolver.parse(bare).await?;

        if parsed.has_domain() {
            Ok(format!("{}.", bare))
        } else {
            Ok(bare.to_string())
        }
    }

    fn hostmaster_fqdn(&self) -> String {
        format!("{}.", self.hostmaster.trim().trim_end_matches('.'))
    }

    pub fn successful(&mut self) {
        self.result = ResultValue::Flag(true);
    }

    pub fn unsuccessful(&mut self) {
        self.result = ResultValue::Flag(false);
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    pub fn result(&self) -> &ResultValue {
        &self.result
    }

    pub fn logs(&self) -> &[String] {
        &self.log
    }

    pub fn to_response(&self) -> BackendResponse {
        BackendResponse {
            result: self.result.clone(),
            log: self.log.clone(),
        }
    }
}
