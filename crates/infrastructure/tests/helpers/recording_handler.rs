use async_trait::async_trait;
use bytes::Bytes;
use ferrous_backend_infrastructure::socket::{
    ClientHandler, ClientId, ClientTransport, SocketError,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerEvent {
    Connect(ClientId),
    Disconnect(ClientId),
    ForceDisconnect(ClientId),
    Request(ClientId, Vec<u8>),
}

/// Records every hook call and echoes request payloads back with an `echo:` prefix.
#[derive(Default)]
pub struct RecordingHandler {
    events: Mutex<Vec<HandlerEvent>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HandlerEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&HandlerEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| matches(e)).count()
    }

    fn push(&self, event: HandlerEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ClientHandler for RecordingHandler {
    async fn client_connect(&self, id: ClientId, _transport: &ClientTransport) {
        self.push(HandlerEvent::Connect(id));
    }

    async fn client_disconnect(&self, id: ClientId, _transport: &ClientTransport) {
        self.push(HandlerEvent::Disconnect(id));
    }

    async fn client_force_disconnect(&self, id: ClientId, _transport: &ClientTransport) {
        self.push(HandlerEvent::ForceDisconnect(id));
    }

    async fn client_request(
        &self,
        id: ClientId,
        transport: &ClientTransport,
        payload: Bytes,
    ) -> Result<(), SocketError> {
        self.push(HandlerEvent::Request(id, payload.to_vec()));
        let mut reply = b"echo:".to_vec();
        reply.extend_from_slice(&payload);
        transport.write(&reply).await?;
        Ok(())
    }
}

/// Answers every request with `size` bytes, for peers that never read.
pub struct FloodingHandler {
    size: usize,
    writing: AtomicBool,
}

impl FloodingHandler {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            writing: AtomicBool::new(false),
        }
    }

    pub fn is_writing(&self) -> bool {
        self.writing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientHandler for FloodingHandler {
    async fn client_connect(&self, _id: ClientId, _transport: &ClientTransport) {}

    async fn client_disconnect(&self, _id: ClientId, _transport: &ClientTransport) {}

    async fn client_force_disconnect(&self, _id: ClientId, _transport: &ClientTransport) {}

    async fn client_request(
        &self,
        _id: ClientId,
        transport: &ClientTransport,
        _payload: Bytes,
    ) -> Result<(), SocketError> {
        self.writing.store(true, Ordering::SeqCst);
        transport.write(&vec![b'x'; self.size]).await?;
        Ok(())
    }
}
