use super::column_u32;
use async_trait::async_trait;
use ferrous_backend_application::ports::RecordRepository;
use ferrous_backend_domain::{DomainError, RecordFilter, ZoneRecord};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

type RecordRow = (
    i64,
    i64,
    String,
    String,
    String,
    i64,
    i64,
    i64,
    i64,
    i64,
    Option<String>,
    i64,
);

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Result<ZoneRecord, DomainError> {
        let (
            id,
            domain_id,
            host,
            record_type,
            target,
            ttl,
            priority,
            weight,
            port,
            flag,
            tag,
            is_active,
        ) = row;

        Ok(ZoneRecord {
            id,
            domain_id,
            host,
            record_type: Arc::from(record_type.as_str()),
            target,
            ttl: column_u32(ttl, "ttl")?,
            priority: column_u32(priority, "priority")?,
            weight: column_u32(weight, "weight")?,
            port: column_u32(port, "port")?,
            flag: column_u32(flag, "flag")?,
            tag,
            is_active: is_active != 0,
        })
    }

    #[instrument(skip(self, record), fields(domain_id = record.domain_id, host = %record.host))]
    pub async fn create(&self, record: &ZoneRecord) -> Result<i64, DomainError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO dns_records
                (domain_id, host, type, target, ttl, priority, weight, port, flag, tag, is_active)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(record.domain_id)
        .bind(record.host.trim().to_lowercase())
        .bind(record.record_type.to_uppercase())
        .bind(&record.target)
        .bind(record.ttl as i64)
        .bind(record.priority as i64)
        .bind(record.weight as i64)
        .bind(record.port as i64)
        .bind(record.flag as i64)
        .bind(&record.tag)
        .bind(if record.is_active { 1i64 } else { 0i64 })
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(id)
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: &RecordFilter) -> Result<Vec<ZoneRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, domain_id, host, type, target, ttl, priority, weight, port, flag, tag, is_active
             FROM dns_records
             WHERE domain_id = ?1
               AND (?2 = 0 OR is_active = 1)
               AND (?3 IS NULL OR LOWER(host) = ?3)
               AND (?4 IS NULL OR UPPER(type) = ?4)
             ORDER BY id",
        )
        .bind(filter.domain_id)
        .bind(if filter.active { 1i64 } else { 0i64 })
        .bind(&filter.host)
        .bind(&filter.record_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(count = rows.len(), "Records loaded");
        rows.into_iter().map(Self::row_to_record).collect()
    }
}
