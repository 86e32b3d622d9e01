//! Validated newtype wrappers for configuration values.
//!
//! Values are validated on construction so a bad host is rejected when the
//! configuration is built rather than on the first request.

use crate::error::ConfigError;
use std::fmt;

/// A validated API host URL.
///
/// The URL must carry an `http` or `https` scheme and a non-empty host. Any
/// surrounding whitespace and trailing `/` characters are removed so that
/// request paths (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use form3_api::HostUrl;
///
/// let url = HostUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// assert_eq!(
///     url.join("/v1/organisation/accounts"),
///     "http://localhost:8080/v1/organisation/accounts"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme, an
    /// unsupported scheme, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends a request path to the host.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://api.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.example.com");

        // With port
        let url = HostUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");

        // With base path
        let url = HostUrl::new("https://api.example.com/sandbox").unwrap();
        assert_eq!(url.host_name(), "api.example.com");
        assert_eq!(url.as_ref(), "https://api.example.com/sandbox");
    }

    #[test]
    fn test_host_url_strips_whitespace_and_trailing_slashes() {
        let url = HostUrl::new("  http://localhost:8080//  ").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
        assert_eq!(url.to_string(), "http://localhost:8080");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        // No scheme
        assert!(HostUrl::new("localhost:8080").is_err());

        // Empty host
        assert!(HostUrl::new("http://").is_err());
        assert!(HostUrl::new("http://:8080").is_err());

        // Unsupported scheme
        assert!(HostUrl::new("ftp://example.com").is_err());
        assert!(HostUrl::new("://example.com").is_err());

        // Empty
        assert!(matches!(
            HostUrl::new(""),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
    }

    #[test]
    fn test_join_appends_path_verbatim() {
        let url = HostUrl::new("http://accountapi:8080").unwrap();
        assert_eq!(
            url.join("/v1/organisation/accounts/abc?version=0"),
            "http://accountapi:8080/v1/organisation/accounts/abc?version=0"
        );
    }
}
