//! Request metadata extraction
//!
//! Builds the transport half of the GraphQL request context from headers and
//! connection info.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::ConnectInfo,
    http::{header, HeaderMap},
};

use crate::models::RequestMetadata;

/// Extract client IP from request headers or connection info
///
/// Prefers `X-Forwarded-For` (first entry), then `X-Real-IP`, then the peer
/// address. Header values that do not parse as an IP are ignored.
pub fn extract_client_ip(
    headers: &HeaderMap,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    // X-Forwarded-For can contain multiple IPs, take the first (client IP)
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| ip.parse::<IpAddr>().is_ok());
    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|ip| ip.parse::<IpAddr>().is_ok());
    if let Some(ip) = real_ip {
        return Some(ip.to_string());
    }

    connect_info.map(|info| info.0.ip().to_string())
}

/// Extract user agent from headers
pub fn extract_user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(|s| s.to_string())
}

/// Build request metadata for a GraphQL request
pub fn request_metadata(
    headers: &HeaderMap,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> RequestMetadata {
    RequestMetadata::new(
        extract_client_ip(headers, connect_info),
        extract_user_agent(headers),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_for_takes_first_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));

        assert_eq!(
            extract_client_ip(&headers, None).as_deref(),
            Some("203.0.113.7")
        );
    }

    #[test]
    fn test_invalid_forwarded_for_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));

        assert_eq!(extract_client_ip(&headers, None).as_deref(), Some("10.0.0.2"));
    }

    #[test]
    fn test_connect_info_fallback() {
        let headers = HeaderMap::new();
        let info = ConnectInfo(SocketAddr::from(([192, 168, 1, 5], 5555)));

        assert_eq!(
            extract_client_ip(&headers, Some(&info)).as_deref(),
            Some("192.168.1.5")
        );
        assert!(extract_client_ip(&headers, None).is_none());
    }

    #[test]
    fn test_request_metadata_collects_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("curl/8.0"));

        let metadata = request_metadata(&headers, None);
        assert_eq!(metadata.user_agent.as_deref(), Some("curl/8.0"));
        assert!(metadata.ip_address.is_none());
    }
}
