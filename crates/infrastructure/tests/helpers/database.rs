use ferrous_backend_domain::{Zone, ZoneRecord};
use ferrous_backend_infrastructure::database::MIGRATOR;
use ferrous_backend_infrastructure::repositories::{
    SqliteRecordRepository, SqliteTldRepository, SqliteZoneRepository,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    pool
}

/// `example.com` (user 7) with an apex A, `www` A, wildcard TXT, an MX and one
/// inactive record. Returns the zone id.
pub async fn seed_example_zone(pool: &SqlitePool) -> i64 {
    let zones = SqliteZoneRepository::new(pool.clone());
    let records = SqliteRecordRepository::new(pool.clone());
    let tlds = SqliteTldRepository::new(pool.clone());

    tlds.insert_all(&["com".to_string(), "net".to_string()])
        .await
        .unwrap();

    let zone_id = zones
        .create(&Zone::new(
            0,
            " Example.COM ",
            vec!["NS1.Example.net".to_string()],
            2024010101,
            7,
        ))
        .await
        .unwrap();

    let mut mx = ZoneRecord::new(0, zone_id, "@", "MX", "mail.example.com", 300);
    mx.priority = 10;
    let mut inactive = ZoneRecord::new(0, zone_id, "old", "A", "192.0.2.99", 300);
    inactive.is_active = false;

    for record in [
        ZoneRecord::new(0, zone_id, "@", "A", "192.0.2.1", 300),
        ZoneRecord::new(0, zone_id, "www", "A", "192.0.2.10", 300),
        ZoneRecord::new(0, zone_id, "*", "TXT", "wildcard", 300),
        mx,
        inactive,
    ] {
        records.create(&record).await.unwrap();
    }

    zone_id
}
