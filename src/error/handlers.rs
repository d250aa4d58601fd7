//! Standardized messages for non-success HTTP responses

use reqwest::StatusCode;

/// Longest response body excerpt carried into a diagnostic
pub const MAX_BODY_EXCERPT: usize = 200;

/// First [`MAX_BODY_EXCERPT`] characters of a response body, trimmed
pub fn body_excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((cut, _)) => format!("{}... ({} bytes total)", &body[..cut], body.len()),
        None => body.to_string(),
    }
}

/// Turns a non-success status into a readable diagnostic. The API client does not
/// fail on these by itself; the decoded body still reaches the caller.
pub struct HttpErrorHandler;

impl HttpErrorHandler {
    /// Describe a failed API call for the log
    pub fn describe(status: StatusCode, operation: &str, error_text: &str) -> String {
        let error_text = body_excerpt(error_text);
        match status.as_u16() {
            400 => format!("Bad request during {}: {}", operation, error_text),
            401 => format!(
                "Unauthorized to perform {} (token missing or expired): {}",
                operation, error_text
            ),
            403 => format!(
                "Forbidden: insufficient permissions for {}: {}",
                operation, error_text
            ),
            404 => format!("Resource not found for {}: {}", operation, error_text),
            409 => format!("Conflict during {}: {}", operation, error_text),
            429 => format!("Rate limited during {}: {}", operation, error_text),
            500 => format!("Docker Hub server error during {}: {}", operation, error_text),
            502 | 503 => format!("Docker Hub unavailable for {}: {}", operation, error_text),
            _ => format!("{} failed (status {}): {}", operation, status, error_text),
        }
    }

    /// Describe a failed login exchange
    pub fn describe_login(status: StatusCode, error_text: &str) -> String {
        match status.as_u16() {
            400 => "Invalid login request parameters".to_string(),
            401 => "Invalid credentials provided".to_string(),
            403 => "Access denied - account locked or two-factor authentication required"
                .to_string(),
            429 => "Too many login attempts".to_string(),
            _ => format!("Login failed (status {}): {}", status, body_excerpt(error_text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_statuses() {
        let msg = HttpErrorHandler::describe(StatusCode::NOT_FOUND, "tag listing", "{}");
        assert!(msg.starts_with("Resource not found for tag listing"));

        let msg = HttpErrorHandler::describe(StatusCode::UNAUTHORIZED, "repository listing", "");
        assert!(msg.contains("token missing or expired"));
    }

    #[test]
    fn test_describe_falls_back_to_status() {
        let msg = HttpErrorHandler::describe(StatusCode::IM_A_TEAPOT, "group listing", "nope");
        assert!(msg.contains("418"));
        assert!(msg.ends_with("nope"));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let page = format!("<html>{}</html>", "é".repeat(500));
        let msg = HttpErrorHandler::describe(StatusCode::BAD_GATEWAY, "tag listing", &page);
        assert!(msg.starts_with("Docker Hub unavailable for tag listing: <html>é"));
        assert!(msg.ends_with(&format!("... ({} bytes total)", page.len())));
        assert!(msg.chars().count() < 300);

        let msg = HttpErrorHandler::describe_login(StatusCode::INTERNAL_SERVER_ERROR, &page);
        assert!(msg.contains("bytes total"));
    }

    #[test]
    fn test_short_bodies_are_kept() {
        assert_eq!(body_excerpt("  {\"detail\": \"nope\"}\n"), "{\"detail\": \"nope\"}");
        assert_eq!(body_excerpt(&"a".repeat(MAX_BODY_EXCERPT)), "a".repeat(MAX_BODY_EXCERPT));
    }

    #[test]
    fn test_describe_login() {
        assert_eq!(
            HttpErrorHandler::describe_login(StatusCode::UNAUTHORIZED, ""),
            "Invalid credentials provided"
        );
    }
}
