use std::sync::OnceLock;

use regex::Regex;

/// Validation outcome with a user-facing error message
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { is_valid: true, error: None }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self { is_valid: false, error: Some(msg.into()) }
    }
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^https?://\S+$").expect("static pattern"))
}

/// True iff the text is an absolute http(s) URL with no whitespace.
/// Scheme is matched case-insensitively; the rest is taken as-is.
pub fn is_registrable_url(text: &str) -> bool {
    url_pattern().is_match(text)
}

/// Validate a URL argument typed by the user (e.g. for `/remove`)
pub fn validate_site_url(target: &str) -> ValidationResult {
    if target.trim().is_empty() {
        return ValidationResult::err("URL cannot be empty");
    }

    if is_registrable_url(target) {
        ValidationResult::ok()
    } else {
        ValidationResult::err("URL must start with http:// or https:// and contain no whitespace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_registrable_url("http://example.com"));
        assert!(is_registrable_url("https://example.com"));
        assert!(is_registrable_url("https://example.com:8080/path?q=1"));
        assert!(is_registrable_url("http://192.168.1.1"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(is_registrable_url("HTTP://example.com"));
        assert!(is_registrable_url("HtTpS://example.com"));
    }

    #[test]
    fn test_rejects_other_schemes_and_bare_hosts() {
        assert!(!is_registrable_url("ftp://example.com"));
        assert!(!is_registrable_url("example.com"));
        assert!(!is_registrable_url("http:/example.com"));
        assert!(!is_registrable_url(""));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_registrable_url("http://example.com/a b"));
        assert!(!is_registrable_url("http://example.com "));
        assert!(!is_registrable_url("http://exam\nple.com"));
        assert!(!is_registrable_url("http://"));
    }

    #[test]
    fn test_validate_site_url_messages() {
        assert!(validate_site_url("https://example.com").is_valid);

        let empty = validate_site_url("  ");
        assert!(!empty.is_valid);
        assert!(empty.error.is_some());

        let bare = validate_site_url("example.com");
        assert!(!bare.is_valid);
        assert!(bare.error.unwrap().contains("http://"));
    }
}
