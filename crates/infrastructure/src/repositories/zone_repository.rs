use super::column_u32;
use async_trait::async_trait;
use ferrous_backend_application::ports::ZoneRepository;
use ferrous_backend_domain::{DomainError, Zone};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument, warn};

type ZoneRow = (
    i64,
    String,
    i64,
    i64,
    String,
    i64,
    i64,
    i64,
    i64,
    i64,
    i64,
);

pub struct SqliteZoneRepository {
    pool: SqlitePool,
}

impl SqliteZoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_zone(row: ZoneRow) -> Result<Zone, DomainError> {
        let (
            id,
            name,
            is_active,
            is_public,
            name_servers,
            serial,
            refresh,
            retry,
            expire,
            ttl,
            user_id,
        ) = row;

        let name_servers: Vec<String> = serde_json::from_str(&name_servers).unwrap_or_else(|e| {
            warn!(zone_id = id, error = %e, "Invalid name_servers column, treating as empty");
            Vec::new()
        });

        Ok(Zone {
            id,
            name: Arc::from(name.as_str()),
            is_active: is_active != 0,
            is_public: is_public != 0,
            name_servers,
            serial: column_u32(serial, "serial")?,
            refresh: column_u32(refresh, "refresh")?,
            retry: column_u32(retry, "retry")?,
            expire: column_u32(expire, "expire")?,
            ttl: column_u32(ttl, "ttl")?,
            user_id,
        })
    }

    /// Inserts a zone; name and name servers are stored lower-cased and trimmed.
    #[instrument(skip(self, zone), fields(zone = %zone.name))]
    pub async fn create(&self, zone: &Zone) -> Result<i64, DomainError> {
        let name = Zone::normalize_name(&zone.name);
        let name_servers: Vec<String> = zone
            .name_servers
            .iter()
            .map(|ns| Zone::normalize_name(ns))
            .collect();
        let name_servers = serde_json::to_string(&name_servers)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO dns_domains
                (name, is_active, is_public, name_servers, serial, refresh, retry, expire, ttl, user_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&name)
        .bind(if zone.is_active { 1i64 } else { 0i64 })
        .bind(if zone.is_public { 1i64 } else { 0i64 })
        .bind(&name_servers)
        .bind(zone.serial as i64)
        .bind(zone.refresh as i64)
        .bind(zone.retry as i64)
        .bind(zone.expire as i64)
        .bind(zone.ttl as i64)
        .bind(zone.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create zone");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(id)
    }
}

#[async_trait]
impl ZoneRepository for SqliteZoneRepository {
    #[instrument(skip(self))]
    async fn find_active_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let row = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, name, is_active, is_public, name_servers, serial, refresh, retry, expire, ttl, user_id
             FROM dns_domains
             WHERE LOWER(name) = LOWER(?) AND is_active = 1 AND deleted_at IS NULL
             ORDER BY version DESC
             LIMIT 1",
        )
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query zone by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_zone).transpose()
    }
}
