//! Location of the model server

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 11434;

/// `scheme://host:port` of the model server (Value Object)
///
/// Parsed from values such as `OLLAMA_HOST`. An empty host part (as in
/// `:1234`) resolves to the loopback address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerHost {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl ServerHost {
    /// Parse a host value, rejecting out-of-range or malformed ports
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match Self::parse_lenient(raw) {
            (host, None) => Ok(host),
            (_, Some(err)) => Err(err),
        }
    }

    /// Parse a host value, substituting the scheme's default port when the
    /// given one is unusable.
    ///
    /// The returned error, if any, describes the substitution; the host is
    /// always usable.
    pub fn parse_lenient(raw: &str) -> (Self, Option<DomainError>) {
        let cleaned = raw.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();

        let (scheme, hostport, default_port) = match cleaned.split_once("://") {
            None => ("http", cleaned, DEFAULT_PORT),
            Some(("http", rest)) => ("http", rest, 80),
            Some(("https", rest)) => ("https", rest, 443),
            Some((other, rest)) => (other, rest, DEFAULT_PORT),
        };
        let hostport = hostport.trim_end_matches('/');

        let (host, port) = match split_host_port(hostport) {
            Some((host, port)) if host.is_empty() => (DEFAULT_HOST.to_string(), port.to_string()),
            Some((host, port)) => (host.to_string(), port.to_string()),
            None => {
                let unbracketed = hostport.trim_matches(|c: char| c == '[' || c == ']');
                let host = if let Ok(ip) = unbracketed.parse::<IpAddr>() {
                    ip.to_string()
                } else if !hostport.is_empty() {
                    hostport.to_string()
                } else {
                    DEFAULT_HOST.to_string()
                };
                (host, default_port.to_string())
            }
        };

        let parsed_port = port
            .parse::<i64>()
            .ok()
            .and_then(|p| u16::try_from(p).ok());

        match parsed_port {
            Some(port) => (
                Self {
                    scheme: scheme.to_string(),
                    host,
                    port,
                },
                None,
            ),
            None => (
                Self {
                    scheme: scheme.to_string(),
                    host,
                    port: default_port,
                },
                Some(DomainError::InvalidHostPort(raw.to_string())),
            ),
        }
    }

    /// Base URL for HTTP requests, with IPv6 hosts bracketed
    pub fn base_url(&self) -> String {
        if self.host.contains(':') {
            format!("{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}

impl Default for ServerHost {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl std::fmt::Display for ServerHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_url())
    }
}

/// Split `host:port` or `[v6]:port`. Returns `None` when no port separator
/// is present or the host part is an unbracketed IPv6 address.
fn split_host_port(s: &str) -> Option<(&str, &str)> {
    if let Some(rest) = s.strip_prefix('[') {
        let end = rest.find(']')?;
        let port = rest[end + 1..].strip_prefix(':')?;
        return Some((&rest[..end], port));
    }
    let idx = s.rfind(':')?;
    let host = &s[..idx];
    if host.contains(':') || host.contains('[') || host.contains(']') {
        return None;
    }
    Some((host, &s[idx + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(scheme: &str, host: &str, port: u16) -> ServerHost {
        ServerHost {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port,
        }
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(ServerHost::parse("").unwrap(), ServerHost::default());
        assert_eq!(
            ServerHost::default().to_string(),
            "http://127.0.0.1:11434"
        );
    }

    #[test]
    fn test_bare_hosts_get_default_port() {
        assert_eq!(
            ServerHost::parse("1.2.3.4").unwrap(),
            host("http", "1.2.3.4", 11434)
        );
        assert_eq!(
            ServerHost::parse("example.com").unwrap(),
            host("http", "example.com", 11434)
        );
        assert_eq!(
            ServerHost::parse(":1234").unwrap(),
            host("http", "127.0.0.1", 1234)
        );
    }

    #[test]
    fn test_scheme_sets_default_port() {
        assert_eq!(
            ServerHost::parse("http://example.com").unwrap(),
            host("http", "example.com", 80)
        );
        assert_eq!(
            ServerHost::parse("https://example.com/").unwrap(),
            host("https", "example.com", 443)
        );
        assert_eq!(
            ServerHost::parse("https://example.com:8443//").unwrap(),
            host("https", "example.com", 8443)
        );
    }

    #[test]
    fn test_quotes_and_whitespace_are_stripped() {
        assert_eq!(
            ServerHost::parse("  \"0.0.0.0:4321\" ").unwrap(),
            host("http", "0.0.0.0", 4321)
        );
        assert_eq!(
            ServerHost::parse("'localhost'").unwrap(),
            host("http", "localhost", 11434)
        );
    }

    #[test]
    fn test_ipv6() {
        assert_eq!(ServerHost::parse("[::1]").unwrap(), host("http", "::1", 11434));
        let parsed = ServerHost::parse("[::1]:8080").unwrap();
        assert_eq!(parsed, host("http", "::1", 8080));
        assert_eq!(parsed.base_url(), "http://[::1]:8080");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let (parsed, err) = ServerHost::parse_lenient("localhost:99999");
        assert_eq!(parsed, host("http", "localhost", 11434));
        assert!(matches!(err, Some(DomainError::InvalidHostPort(_))));

        let (parsed, err) = ServerHost::parse_lenient("https://example.com:abc");
        assert_eq!(parsed.port, 443);
        assert!(err.is_some());

        assert!(ServerHost::parse("example.com:-1").is_err());
    }
}
