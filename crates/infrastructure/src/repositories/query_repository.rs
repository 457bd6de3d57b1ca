use async_trait::async_trait;
use ferrous_backend_application::ports::QueryRepository;
use ferrous_backend_domain::{DomainError, Query};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteQueryRepository {
    pool: SqlitePool,
}

impl SqliteQueryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| DomainError::DatabaseError(e.to_string()))
}

#[async_trait]
impl QueryRepository for SqliteQueryRepository {
    #[instrument(skip(self, query), fields(method = %query.method()))]
    async fn save(&self, query: &mut Query) -> Result<(), DomainError> {
        let parameters = encode(&query.request.parameters)?;
        let response = query.response.as_ref().map(encode).transpose()?;
        let record_ids = encode(&query.record_ids)?;
        let created_at = query.created_at.to_rfc3339();
        let updated_at = query.updated_at.to_rfc3339();

        if let Some(id) = query.id {
            sqlx::query(
                "UPDATE dns_queries
                 SET method = ?, parameters = ?, response = ?, domain_id = ?, user_id = ?,
                     record_ids = ?, updated_at = ?
                 WHERE id = ?",
            )
            .bind(&query.request.method)
            .bind(&parameters)
            .bind(&response)
            .bind(query.domain_id)
            .bind(query.user_id)
            .bind(&record_ids)
            .bind(&updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to update query");
                DomainError::DatabaseError(e.to_string())
            })?;

            return Ok(());
        }

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO dns_queries
                (method, parameters, response, domain_id, user_id, record_ids, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&query.request.method)
        .bind(&parameters)
        .bind(&response)
        .bind(query.domain_id)
        .bind(query.user_id)
        .bind(&record_ids)
        .bind(&created_at)
        .bind(&updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert query");
            DomainError::DatabaseError(e.to_string())
        })?;

        query.id = Some(id);
        Ok(())
    }
}
