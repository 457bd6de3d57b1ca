mod record;
mod record_type;

pub use record::{RecordFilter, ZoneRecord, APEX_HOST, WILDCARD_HOST};
pub use record_type::RecordType;
