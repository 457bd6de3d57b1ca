use crate::socket::{ClientHandler, ClientId, ClientTransport, SocketError};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_backend_application::use_cases::HandleBackendRequestUseCase;
use ferrous_backend_domain::{BackendRequest, BackendResponse};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Answers remote backend calls arriving on the socket, one JSON line per request.
pub struct RemoteBackendHandler {
    use_case: Arc<HandleBackendRequestUseCase>,
}

impl RemoteBackendHandler {
    pub fn new(use_case: Arc<HandleBackendRequestUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn respond(&self, payload: &[u8]) -> BackendResponse {
        match BackendRequest::from_slice(payload) {
            Ok(request) => self.use_case.execute(request).await,
            Err(e) => {
                warn!(error = %e, "Rejected backend payload");
                BackendResponse::failure(e.to_string())
            }
        }
    }
}

#[async_trait]
impl ClientHandler for RemoteBackendHandler {
    async fn client_connect(&self, id: ClientId, transport: &ClientTransport) {
        debug!(client_id = id, remote = %transport.remote(), "Backend client attached");
    }

    async fn client_disconnect(&self, id: ClientId, _transport: &ClientTransport) {
        debug!(client_id = id, "Backend client detached");
    }

    async fn client_force_disconnect(&self, id: ClientId, _transport: &ClientTransport) {
        info!(client_id = id, "Closing backend client for shutdown");
    }

    async fn client_request(
        &self,
        id: ClientId,
        transport: &ClientTransport,
        payload: Bytes,
    ) -> Result<(), SocketError> {
        let response = self.respond(&payload).await;
        debug!(client_id = id, records = response.result.records().len(), "Backend response ready");
        transport.write_line(&response.to_json()).await?;
        Ok(())
    }
}
