use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::unix::OwnedWriteHalf;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

pub type ClientId = u64;

/// Write side of a client connection, shared by every in-flight request task.
pub struct ClientTransport {
    writer: Mutex<OwnedWriteHalf>,
    closed: CancellationToken,
    remote: String,
}

impl ClientTransport {
    pub fn new(writer: OwnedWriteHalf, remote: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            closed: CancellationToken::new(),
            remote: remote.into(),
        }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Writes `bytes` in full. Gives up as soon as the transport is closed,
    /// even when the peer has stopped reading.
    pub async fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = tokio::select! {
            biased;
            _ = self.closed.cancelled() => return Err(closed_error()),
            writer = self.writer.lock() => writer,
        };

        let written = tokio::select! {
            biased;
            _ = self.closed.cancelled() => None,
            result = write_and_flush(&mut writer, bytes) => Some(result),
        };

        match written {
            Some(result) => result,
            None => {
                let _ = writer.shutdown().await;
                Err(closed_error())
            }
        }
    }

    /// Writes `text` followed by a newline in a single locked write.
    pub async fn write_line(&self, text: &str) -> io::Result<()> {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.write(line.as_bytes()).await
    }

    /// Ends the connection; the read loop for this client stops as well.
    /// A write in progress is abandoned rather than awaited.
    pub async fn close(&self) {
        self.closed.cancel();
        if let Ok(mut writer) = self.writer.try_lock() {
            let _ = writer.shutdown().await;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    pub async fn closed(&self) {
        self.closed.cancelled().await
    }
}

async fn write_and_flush(writer: &mut OwnedWriteHalf, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes).await?;
    writer.flush().await
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "client transport closed")
}

pub struct Client {
    pub id: ClientId,
    pub transport: Arc<ClientTransport>,
    pub connected_at: DateTime<Utc>,
}

impl Client {
    pub fn new(id: ClientId, transport: Arc<ClientTransport>) -> Self {
        Self {
            id,
            transport,
            connected_at: Utc::now(),
        }
    }

    pub fn describe(&self) -> ClientDescriptor {
        ClientDescriptor {
            id: self.id,
            remote: self.transport.remote().to_string(),
            connected_at: self.connected_at,
        }
    }
}

/// Entry of the `\c` listing.
#[derive(Debug, Clone, Serialize)]
pub struct ClientDescriptor {
    pub id: ClientId,
    pub remote: String,
    pub connected_at: DateTime<Utc>,
}
