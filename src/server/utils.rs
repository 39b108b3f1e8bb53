//! Server helper functions

use super::server::HttpServer;
use crate::utils::error::ServiceError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into a startup error that names the address
    pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str) -> ServiceError {
        let hint = match error.kind() {
            ErrorKind::AddrInUse => "address already in use; stop the other process or pick another port with --port",
            ErrorKind::PermissionDenied => "permission denied; ports below 1024 need elevated privileges",
            ErrorKind::AddrNotAvailable => "address not available on this host; check --host",
            _ => "unable to bind",
        };

        ServiceError::server(format!("Failed to bind {}: {} ({})", bind_addr, hint, error))
    }
}
