use async_trait::async_trait;
use ferrous_backend_application::ports::TldRepository;
use ferrous_backend_domain::DomainError;
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteTldRepository {
    pool: SqlitePool,
}

impl SqliteTldRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds suffixes, ignoring ones already present. Returns how many were new.
    #[instrument(skip(self, names), fields(count = names.len()))]
    pub async fn insert_all(&self, names: &[String]) -> Result<u64, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin tld transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut inserted = 0;
        for name in names {
            let result = sqlx::query("INSERT OR IGNORE INTO dns_domain_tlds (name) VALUES (?)")
                .bind(name.trim().to_lowercase())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to insert tld");
                    DomainError::DatabaseError(e.to_string())
                })?;
            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit tld transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(inserted)
    }
}

#[async_trait]
impl TldRepository for SqliteTldRepository {
    #[instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM dns_domain_tlds WHERE name = LOWER(?) LIMIT 1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to query tld");
                    DomainError::DatabaseError(e.to_string())
                })?;

        Ok(row.is_some())
    }
}
