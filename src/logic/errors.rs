use anyhow::Error;

/// Failure categories for relay calls (logged only; the user sees one message)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    BadRequest,   // HTTP 400 (unknown service/template id)
    Unauthorized, // HTTP 401/403 (bad user id, API access disabled)
    RateLimited,  // HTTP 429
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

impl ErrorType {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorType::ConnectionRefused => "connection refused",
            ErrorType::Timeout => "timeout",
            ErrorType::BadRequest => "bad request",
            ErrorType::Unauthorized => "unauthorized",
            ErrorType::RateLimited => "rate limited",
            ErrorType::ServerError => "server error",
            ErrorType::NetworkError => "network error",
            ErrorType::Other => "other",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // HTTP status codes take precedence (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                400 => ErrorType::BadRequest,
                401 | 403 => ErrorType::Unauthorized,
                429 => ErrorType::RateLimited,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the debug log - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_connection_refused() {
        let err = anyhow::anyhow!("Connection Refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout_in_context_chain() {
        let err = anyhow::anyhow!("operation timed out").context("Failed to reach email relay");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_dns_error() {
        let err = anyhow::anyhow!("dns lookup failed");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("template rendering failed");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to reach email relay");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }
}
