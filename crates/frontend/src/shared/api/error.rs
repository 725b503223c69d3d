use thiserror::Error;

/// Failure of a backend round trip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx status. `message` is the server's `message` field, or
    /// `API Error: <status text>` when the body carried none.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_server_message_only() {
        let err = ApiError::Http {
            status: 409,
            message: "Barcode already sold".into(),
        };
        assert_eq!(err.to_string(), "Barcode already sold");
        assert_eq!(err.status(), Some(409));
        assert_eq!(ApiError::Transport("offline".into()).status(), None);
    }
}
