//! Error taxonomy for API calls.
//!
//! The views render these with `to_string()`, so the `Rejected` display is the
//! server's own message (or the per-endpoint fallback) with no extra dressing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the body's
    /// `message` field when one was sent, otherwise a fallback naming the
    /// operation.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never completed or the body would not decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response without the field the endpoint promises.
    #[error("response missing {0}")]
    MissingPayload(&'static str),
}

impl ApiError {
    /// True when the server told us the token is no good.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_the_server_message() {
        let err = ApiError::Rejected {
            status: 409,
            message: "Username already taken".to_string(),
        };
        assert_eq!(err.to_string(), "Username already taken");
    }

    #[test]
    fn test_missing_payload_names_the_field() {
        let err = ApiError::MissingPayload("contract");
        assert_eq!(err.to_string(), "response missing contract");
    }

    #[test]
    fn test_unauthorized_detection() {
        let unauthorized = ApiError::Rejected {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(unauthorized.is_unauthorized());

        let conflict = ApiError::Rejected {
            status: 409,
            message: "taken".to_string(),
        };
        assert!(!conflict.is_unauthorized());
    }
}
