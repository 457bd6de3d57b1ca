//! Ferrous Backend Domain Layer
pub mod backend;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod host;
pub mod query;
pub mod zone;

pub use backend::{
    BackendMethod, BackendRequest, BackendResponse, ListParameters, LookupParameters,
    ResultRecord, ResultValue,
};
pub use config::{CliOverrides, Config, ConfigError, SuffixSource};
pub use dns_record::{RecordFilter, RecordType, ZoneRecord, APEX_HOST, WILDCARD_HOST};
pub use errors::DomainError;
pub use host::HostDecomposition;
pub use query::Query;
pub use zone::Zone;
