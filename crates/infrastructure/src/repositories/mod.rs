pub mod query_repository;
pub mod record_repository;
pub mod tld_repository;
pub mod zone_repository;

pub use query_repository::SqliteQueryRepository;
pub use record_repository::SqliteRecordRepository;
pub use tld_repository::SqliteTldRepository;
pub use zone_repository::SqliteZoneRepository;

use ferrous_backend_domain::DomainError;
use tracing::error;

/// Reads an unsigned 32-bit column stored as a SQLite integer.
pub(crate) fn column_u32(value: i64, column: &str) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        error!(column, value, "Column value out of range");
        DomainError::DatabaseError(format!("column {} out of range: {}", column, value))
    })
}
