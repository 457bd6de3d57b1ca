mod handle_backend_request;

pub use handle_backend_request::HandleBackendRequestUseCase;
