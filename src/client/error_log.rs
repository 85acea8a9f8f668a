// ABOUTME: Bounded in-memory log of failed API calls with trace ids
// ABOUTME: Maps HTTP failures to error codes and user-facing Spanish messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::constants::client::MAX_ERROR_LOG_ENTRIES;
use crate::errors::{AppError, ErrorCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Shown for transport failures
pub const NETWORK_ERROR_MESSAGE: &str = "Error de conexión. Verifica tu conexión a internet.";
/// Shown when a response body cannot be decoded
pub const PARSE_ERROR_MESSAGE: &str = "Error al procesar la respuesta del servidor";

/// New trace id of the form `trace_{millis}_{suffix}`
#[must_use]
pub fn generate_trace_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "trace_{}_{}",
        Utc::now().timestamp_millis(),
        suffix.get(..9).unwrap_or(&suffix)
    )
}

/// User-facing message for a failed response
#[must_use]
pub fn user_message(status: u16, server_message: Option<&str>) -> String {
    match status {
        401 | 419 => "Tu sesión ha expirado. Por favor, inicia sesión nuevamente.".to_owned(),
        403 => "No tienes permisos para realizar esta acción.".to_owned(),
        404 => "El recurso solicitado no fue encontrado.".to_owned(),
        500..=599 => "Error del servidor. El equipo técnico ha sido notificado.".to_owned(),
        400..=499 => server_message
            .filter(|message| !message.is_empty())
            .unwrap_or("Datos de solicitud inválidos.")
            .to_owned(),
        _ => "Ocurrió un error inesperado. Por favor, inténtalo de nuevo.".to_owned(),
    }
}

/// Error for a non-success status, tagged with its trace id
#[must_use]
pub fn status_error(status: u16, server_message: Option<&str>, trace_id: &str) -> AppError {
    AppError::new(
        ErrorCode::from_http_status(status),
        user_message(status, server_message),
    )
    .with_request_id(trace_id)
}

/// One failed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorLogEntry {
    /// When the failure was recorded
    pub timestamp: DateTime<Utc>,
    /// HTTP method
    pub method: String,
    /// Full request URL
    pub url: String,
    /// Response status; `None` for transport failures
    pub status: Option<u16>,
    /// Raw error text (server message or transport error)
    pub error: String,
    /// Trace id sent as `X-Trace-ID`
    pub trace_id: String,
}

/// Keeps the most recent failures, oldest evicted first
#[derive(Debug)]
pub struct ErrorLog {
    capacity: usize,
    entries: Mutex<VecDeque<ErrorLogEntry>>,
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::with_capacity(MAX_ERROR_LOG_ENTRIES)
    }
}

impl ErrorLog {
    /// Log holding at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append an entry, evicting the oldest beyond capacity
    pub fn record(&self, entry: ErrorLogEntry) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Snapshot, oldest first
    #[must_use]
    pub fn entries(&self) -> Vec<ErrorLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> ErrorLogEntry {
        ErrorLogEntry {
            timestamp: Utc::now(),
            method: "GET".to_owned(),
            url: format!("http://localhost/{n}"),
            status: Some(500),
            error: "boom".to_owned(),
            trace_id: generate_trace_id(),
        }
    }

    #[test]
    fn test_keeps_last_entries() {
        let log = ErrorLog::default();
        for n in 0..60 {
            log.record(entry(n));
        }
        let entries = log.entries();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0].url, "http://localhost/10");
        assert_eq!(entries[49].url, "http://localhost/59");
        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_trace_id_shape() {
        let id = generate_trace_id();
        let parts: Vec<_> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "trace");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_user_messages() {
        assert!(user_message(401, None).starts_with("Tu sesión ha expirado"));
        assert!(user_message(403, None).starts_with("No tienes permisos"));
        assert_eq!(user_message(422, Some("Edad inválida")), "Edad inválida");
        assert_eq!(user_message(400, None), "Datos de solicitud inválidos.");
        assert!(user_message(503, Some("db down")).starts_with("Error del servidor"));
    }

    #[test]
    fn test_status_error_carries_code_and_trace() {
        let err = status_error(404, None, "trace_1_abc");
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(err.request_id.as_deref(), Some("trace_1_abc"));
    }
}
