mod client;
mod error;
mod handler;
mod manager;

pub use client::{Client, ClientDescriptor, ClientId, ClientTransport};
pub use error::SocketError;
pub use handler::ClientHandler;
pub use manager::{ConnectionManager, ManagerState, DESCRIBE_TOKEN, QUIT_TOKEN};
