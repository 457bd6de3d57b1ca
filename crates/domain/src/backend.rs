use crate::dns_record::RecordType;
use crate::errors::DomainError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Methods of the remote backend protocol this backend answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendMethod {
    Initialize,
    List,
    Lookup,
    Unsupported(String),
}

impl BackendMethod {
    pub fn parse(method: &str) -> Self {
        match method.trim().to_lowercase().as_str() {
            "initialize" => BackendMethod::Initialize,
            "list" => BackendMethod::List,
            "lookup" => BackendMethod::Lookup,
            _ => BackendMethod::Unsupported(method.to_string()),
        }
    }
}

/// A single method call sent by the DNS server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendRequest {
    pub method: String,

    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl BackendRequest {
    pub fn new(method: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            parameters,
        }
    }

    pub fn from_slice(payload: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(payload).map_err(|e| DomainError::InvalidRequest(e.to_string()))
    }

    pub fn method(&self) -> BackendMethod {
        BackendMethod::parse(&self.method)
    }

    pub fn parameters<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        serde_json::from_value(self.parameters.clone()).map_err(|e| {
            DomainError::InvalidParameters {
                method: self.method.clone(),
                reason: e.to_string(),
            }
        })
    }
}

/// Parameters of a `list` (zone transfer) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParameters {
    pub zonename: String,

    #[serde(default)]
    pub domain_id: Option<i64>,
}

/// Parameters of a `lookup` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupParameters {
    pub qtype: String,

    pub qname: String,

    #[serde(default)]
    pub remote: Option<String>,

    #[serde(default)]
    pub local: Option<String>,

    #[serde(default, rename = "real-remote")]
    pub real_remote: Option<String>,

    #[serde(default, rename = "zone-id")]
    pub zone_id: Option<i64>,
}

impl LookupParameters {
    pub fn is_soa(&self) -> bool {
        self.qtype.eq_ignore_ascii_case("soa")
    }
}

/// One answer row of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub qtype: RecordType,
    pub qname: String,
    pub ttl: u32,
    pub content: String,
    pub auth: bool,
}

/// The `result` slot: a bare flag or the ordered answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Flag(bool),
    Records(Vec<ResultRecord>),
}

impl ResultValue {
    pub fn records(&self) -> &[ResultRecord] {
        match self {
            ResultValue::Records(records) => records,
            ResultValue::Flag(_) => &[],
        }
    }

    pub fn is_false(&self) -> bool {
        matches!(self, ResultValue::Flag(false))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, ResultValue::Flag(true))
    }
}

impl Default for ResultValue {
    fn default() -> Self {
        ResultValue::Flag(false)
    }
}

/// Payload written back to the DNS server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackendResponse {
    pub result: ResultValue,
    pub log: Vec<String>,
}

impl BackendResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: ResultValue::Flag(false),
            log: vec![message.into()],
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"result":false,"log":[]}"#.to_string())
    }
}
