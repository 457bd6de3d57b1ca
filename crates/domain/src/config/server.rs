use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Unix socket the DNS server connects to.
    #[serde(default = "default_socket_path")]
    pub socket_path: String,

    /// Size of the buffer used for each read from a client connection.
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            read_buffer_size: default_read_buffer_size(),
        }
    }
}

fn default_socket_path() -> String {
    "/var/run/ferrous-backend/backend.sock".to_string()
}

fn default_read_buffer_size() -> usize {
    64 * 1024
}
