// crates/jsglue/src/location.rs — the page location absolute URLs are built against
use axum::http::{header, HeaderMap};

/// Protocol and host of the page, as in `window.location`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Protocol with its trailing colon, e.g. `https:`
    pub protocol: String,
    /// Host with optional port, e.g. `example.com:8080`
    pub host: String,
}

impl Location {
    /// Creates a location; a missing trailing colon on `protocol` is added
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        let mut protocol = protocol.into();
        if !protocol.ends_with(':') {
            protocol.push(':');
        }
        Self {
            protocol,
            host: host.into(),
        }
    }

    /// Parses an origin such as `https://example.com:8080`
    ///
    /// ```
    /// use jsglue::Location;
    ///
    /// let location = Location::parse("https://example.com:8080").unwrap();
    /// assert_eq!(location.scheme(), "https");
    /// assert_eq!(location.host, "example.com:8080");
    /// assert!(Location::parse("example.com").is_none());
    /// ```
    pub fn parse(origin: &str) -> Option<Self> {
        let (scheme, rest) = origin.split_once("://")?;
        let host = rest.split('/').next().unwrap_or(rest);
        if scheme.is_empty() || host.is_empty() {
            return None;
        }
        Some(Self::new(scheme, host))
    }

    /// Derives the location of the page that issued a request
    ///
    /// Uses `Host`, and `X-Forwarded-Proto` when a proxy set it; otherwise
    /// assumes `http`.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let host = headers.get(header::HOST)?.to_str().ok()?;
        let scheme = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or("http");
        Some(Self::new(scheme, host))
    }

    /// Protocol without its trailing colon
    pub fn scheme(&self) -> &str {
        self.protocol.split(':').next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        assert!(Location::from_headers(&headers).is_none());

        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
        let location = Location::from_headers(&headers).unwrap();
        assert_eq!(location.protocol, "http:");
        assert_eq!(location.host, "localhost:3000");

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https, http"));
        assert_eq!(Location::from_headers(&headers).unwrap().scheme(), "https");
    }

    #[test]
    fn test_new_keeps_existing_colon() {
        assert_eq!(Location::new("https:", "a.test").protocol, "https:");
        assert_eq!(Location::new("https", "a.test").protocol, "https:");
    }
}
