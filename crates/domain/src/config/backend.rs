use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Mailbox of the zone administrator, rendered into every SOA record.
    #[serde(default = "default_hostmaster")]
    pub hostmaster: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            hostmaster: default_hostmaster(),
        }
    }
}

fn default_hostmaster() -> String {
    "hostmaster.localhost".to_string()
}
