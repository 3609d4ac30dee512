use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401
    Forbidden,    // HTTP 403
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

impl ErrorType {
    /// Short label for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "Connection refused",
            ErrorType::Timeout => "Timed out",
            ErrorType::Unauthorized => "Login required",
            ErrorType::Forbidden => "Access denied",
            ErrorType::NotFound => "Not found",
            ErrorType::ServerError => "Server error",
            ErrorType::NetworkError => "Network error",
            ErrorType::Other => "Error",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    let error_msg = error.to_string().to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // HTTP status codes come through the reqwest error, possibly under context
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());
    while let Some(err) = current {
        if let Some(status) = err.downcast_ref::<reqwest::Error>().and_then(|e| e.status()) {
            return match status.as_u16() {
                401 => ErrorType::Unauthorized,
                403 => ErrorType::Forbidden,
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
        current = err.source();
    }

    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Raw error details: the reqwest error if there is one, else the root cause
pub fn format_error_message(error: &Error) -> String {
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    error.root_cause().to_string()
}

/// One line for the status bar, e.g. "Timed out: request timed out"
pub fn describe_error(error: &Error) -> String {
    format!("{}: {}", classify_error(error).label(), format_error_message(error))
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
    fn test_classify_timeout() {
        assert_eq!(classify_error(&anyhow::anyhow!("request timed out")), ErrorType::Timeout);
        assert_eq!(classify_error(&anyhow::anyhow!("operation timeout")), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_network_error() {
        assert_eq!(classify_error(&anyhow::anyhow!("dns lookup failed")), ErrorType::NetworkError);
        assert_eq!(classify_error(&anyhow::anyhow!("network unreachable")), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("some random error");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to fetch folder tree");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn test_describe_error() {
        let err = anyhow::anyhow!("connection refused");
        assert_eq!(describe_error(&err), "Connection refused: connection refused");
    }
}
