mod builders;

pub use builders::ZoneRecordBuilder;
