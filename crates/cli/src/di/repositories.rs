use ferrous_backend_infrastructure::repositories::{
    SqliteQueryRepository, SqliteRecordRepository, SqliteTldRepository, SqliteZoneRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub zone: Arc<SqliteZoneRepository>,
    pub record: Arc<SqliteRecordRepository>,
    pub tld: Arc<SqliteTldRepository>,
    pub query: Arc<SqliteQueryRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            zone: Arc::new(SqliteZoneRepository::new(pool.clone())),
            record: Arc::new(SqliteRecordRepository::new(pool.clone())),
            tld: Arc::new(SqliteTldRepository::new(pool.clone())),
            query: Arc::new(SqliteQueryRepository::new(pool)),
        }
    }
}
