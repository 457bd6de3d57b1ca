use crate::backend::{BackendRequest, BackendResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One request/response exchange, persisted after the response is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub id: Option<i64>,
    pub request: BackendRequest,
    pub response: Option<BackendResponse>,
    pub domain_id: Option<i64>,
    pub user_id: Option<i64>,
    pub record_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Query {
    pub fn new(request: BackendRequest) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            request,
            response: None,
            domain_id: None,
            user_id: None,
            record_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn method(&self) -> &str {
        &self.request.method
    }

    pub fn assign_zone(&mut self, domain_id: i64, user_id: i64) {
        self.domain_id = Some(domain_id);
        self.user_id = Some(user_id);
    }

    pub fn set_response(&mut self, response: BackendResponse) {
        self.response = Some(response);
        self.updated_at = Utc::now();
    }
}
