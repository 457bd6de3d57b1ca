use super::{Client, ClientDescriptor, ClientHandler, ClientId, ClientTransport, SocketError};
use bytes::Bytes;
use dashmap::DashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::unix::OwnedReadHalf;
use tokio::net::{UnixListener, UnixStream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Ends the sending client's connection.
pub const QUIT_TOKEN: &str = "\\q";
/// Lists every connected client as a JSON array.
pub const DESCRIBE_TOKEN: &str = "\\c";

const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ManagerState {
    NotStarted = 0,
    Running = 1,
    ShuttingDown = 2,
    Stopped = 3,
}

impl ManagerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ManagerState::NotStarted,
            1 => ManagerState::Running,
            2 => ManagerState::ShuttingDown,
            _ => ManagerState::Stopped,
        }
    }
}

/// Owns the listening Unix socket and the registry of connected clients.
///
/// Every chunk read from a client is handled on its own task, so requests
/// from one client may complete out of order.
pub struct ConnectionManager {
    socket_path: PathBuf,
    read_buffer_size: usize,
    handler: Arc<dyn ClientHandler>,
    clients: DashMap<ClientId, Client>,
    next_id: AtomicU64,
    state: AtomicU8,
    cleaned_up: AtomicBool,
    shutdown: CancellationToken,
}

impl ConnectionManager {
    pub fn new(
        socket_path: impl Into<PathBuf>,
        read_buffer_size: usize,
        handler: Arc<dyn ClientHandler>,
    ) -> Self {
        Self {
            socket_path: socket_path.into(),
            read_buffer_size: read_buffer_size.max(1),
            handler,
            clients: DashMap::new(),
            next_id: AtomicU64::new(1),
            state: AtomicU8::new(ManagerState::NotStarted as u8),
            cleaned_up: AtomicBool::new(false),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn state(&self) -> ManagerState {
        ManagerState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Binds the socket and spawns the accept loop.
    pub async fn start(self: &Arc<Self>) -> Result<(), SocketError> {
        if self.state() != ManagerState::NotStarted {
            return Err(SocketError::AlreadyStarted);
        }

        self.prepare_socket()?;

        let listener = UnixListener::bind(&self.socket_path).map_err(|e| {
            error!(path = %self.socket_path.display(), error = %e, "Failed to bind socket");
            SocketError::Bind {
                path: self.socket_path.display().to_string(),
                source: e,
            }
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.socket_path, std::fs::Permissions::from_mode(0o600))?;
        }

        if self
            .state
            .compare_exchange(
                ManagerState::NotStarted as u8,
                ManagerState::Running as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            return Err(SocketError::AlreadyStarted);
        }

        info!(path = %self.socket_path.display(), "Backend socket listening");

        let manager = Arc::clone(self);
        tokio::spawn(async move {
            manager.accept_loop(listener).await;
        });

        Ok(())
    }

    fn prepare_socket(&self) -> Result<(), SocketError> {
        if std::fs::symlink_metadata(&self.socket_path).is_ok() {
            std::fs::remove_file(&self.socket_path).map_err(|e| {
                error!(path = %self.socket_path.display(), error = %e, "Failed to remove stale socket");
                SocketError::StaleArtifact {
                    path: self.socket_path.display().to_string(),
                    source: e,
                }
            })?;
            debug!(path = %self.socket_path.display(), "Removed stale socket");
        }

        if let Some(parent) = self.socket_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(())
    }

    async fn accept_loop(self: Arc<Self>, listener: UnixListener) {
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                accepted = listener.accept() => match accepted {
                    Ok((stream, _addr)) => {
                        self.client_setup(stream);
                    }
                    Err(e) => {
                        error!(error = %e, "Error accepting backend connection");
                        tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                    }
                },
            }
        }

        debug!("Accept loop stopped");
    }

    /// Registers a freshly accepted stream and starts reading from it.
    pub fn client_setup(self: &Arc<Self>, stream: UnixStream) -> ClientId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let remote = remote_label(&stream, id);

        let (reader, writer) = stream.into_split();
        let transport = Arc::new(ClientTransport::new(writer, remote));
        self.clients
            .insert(id, Client::new(id, Arc::clone(&transport)));

        info!(client_id = id, remote = %transport.remote(), "Client connected");

        let manager = Arc::clone(self);
        tokio::spawn(async move {
            manager.handler.client_connect(id, &transport).await;
            manager.read_loop(id, reader, transport).await;
        });

        id
    }

    async fn read_loop(
        self: Arc<Self>,
        id: ClientId,
        mut reader: OwnedReadHalf,
        transport: Arc<ClientTransport>,
    ) {
        let mut buf = vec![0u8; self.read_buffer_size];

        loop {
            tokio::select! {
                _ = transport.closed() => break,
                read = reader.read(&mut buf) => match read {
                    Ok(0) => break,
                    Ok(n) => {
                        let payload = Bytes::copy_from_slice(&buf[..n]);
                        self.handle_frame(id, &transport, payload).await;
                    }
                    Err(e) => {
                        warn!(client_id = id, error = %e, "Client read failed");
                        break;
                    }
                },
            }
        }

        self.client_end(id, &transport).await;
    }

    async fn handle_frame(&self, id: ClientId, transport: &Arc<ClientTransport>, payload: Bytes) {
        let token = String::from_utf8_lossy(&payload).trim().to_lowercase();

        match token.as_str() {
            QUIT_TOKEN => {
                debug!(client_id = id, "Client requested quit");
                transport.close().await;
            }
            DESCRIBE_TOKEN => {
                let listing = serde_json::to_string(&self.describe_clients())
                    .unwrap_or_else(|_| "[]".to_string());
                if let Err(e) = transport.write_line(&listing).await {
                    warn!(client_id = id, error = %e, "Failed to write client listing");
                }
            }
            _ => {
                let handler = Arc::clone(&self.handler);
                let transport = Arc::clone(transport);
                tokio::spawn(async move {
                    if let Err(e) = handler.client_request(id, &transport, payload).await {
                        warn!(client_id = id, error = %e, "Client request failed");
                    }
                });
            }
        }
    }

    async fn client_end(&self, id: ClientId, transport: &ClientTransport) {
        // Force-disconnected clients are already deregistered.
        if self.clients.remove(&id).is_some() {
            self.handler.client_disconnect(id, transport).await;
            info!(client_id = id, "Client disconnected");
        }
    }

    pub fn describe_clients(&self) -> Vec<ClientDescriptor> {
        let mut clients: Vec<ClientDescriptor> =
            self.clients.iter().map(|entry| entry.describe()).collect();
        clients.sort_by_key(|c| c.id);
        clients
    }

    /// Stops accepting and unlinks the socket file.
    pub fn stop(&self) -> Result<(), SocketError> {
        self.shutdown.cancel();
        self.state
            .store(ManagerState::Stopped as u8, Ordering::Release);

        match std::fs::remove_file(&self.socket_path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(SocketError::Io(e)),
        }

        info!(path = %self.socket_path.display(), "Backend socket stopped");
        Ok(())
    }

    /// Force-disconnects every client, then stops. Only the first call acts;
    /// later calls return `Ok(false)`.
    pub async fn cleanup(&self) -> Result<bool, SocketError> {
        if self.cleaned_up.swap(true, Ordering::AcqRel) {
            return Ok(false);
        }

        self.state
            .store(ManagerState::ShuttingDown as u8, Ordering::Release);
        info!(clients = self.clients.len(), "Shutting down backend socket");

        let ids: Vec<ClientId> = self.clients.iter().map(|entry| *entry.key()).collect();
        for id in ids {
            if let Some((_, client)) = self.clients.remove(&id) {
                self.handler
                    .client_force_disconnect(id, &client.transport)
                    .await;
                client.transport.close().await;
            }
        }

        self.stop()?;
        Ok(true)
    }

    /// Resolves once `stop` has been called.
    pub async fn stopped(&self) {
        self.shutdown.cancelled().await
    }
}

fn remote_label(stream: &UnixStream, id: ClientId) -> String {
    match stream.peer_cred().ok().and_then(|cred| cred.pid()) {
        Some(pid) => format!("pid:{}", pid),
        None => format!("client:{}", id),
    }
}
