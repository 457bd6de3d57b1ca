use super::{ClientId, ClientTransport, SocketError};
use async_trait::async_trait;
use bytes::Bytes;

/// Hooks the connection manager calls over a client's lifetime.
#[async_trait]
pub trait ClientHandler: Send + Sync {
    async fn client_connect(&self, id: ClientId, transport: &ClientTransport);

    /// Peer closed the stream.
    async fn client_disconnect(&self, id: ClientId, transport: &ClientTransport);

    /// Manager is shutting down and is about to close this client.
    async fn client_force_disconnect(&self, id: ClientId, transport: &ClientTransport);

    /// `payload` is the raw chunk as read, neither trimmed nor case-folded.
    async fn client_request(
        &self,
        id: ClientId,
        transport: &ClientTransport,
        payload: Bytes,
    ) -> Result<(), SocketError>;
}
