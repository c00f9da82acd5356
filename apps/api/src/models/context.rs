//! Per-request context handed to every resolver
//!
//! The transport layer builds a [`RequestContext`] for each GraphQL request.
//! Resolvers never branch on its contents; it is carried for logging and
//! tracing only.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Fixed greeting payload configured at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting(String);

impl Greeting {
    /// Create a greeting payload
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Greeting text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new("hello from critic")
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transport metadata extracted from the incoming HTTP request
#[derive(Debug, Clone, Serialize)]
pub struct RequestMetadata {
    /// Unique id for correlating log lines of one request
    pub request_id: Uuid,

    /// When the request was received
    pub received_at: DateTime<Utc>,

    /// Client IP address (may be from X-Forwarded-For behind proxy)
    pub ip_address: Option<String>,

    /// Client user agent string
    pub user_agent: Option<String>,
}

impl RequestMetadata {
    /// Create new request metadata with IP and user agent
    pub fn new(ip_address: Option<String>, user_agent: Option<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            received_at: Utc::now(),
            ip_address,
            user_agent,
        }
    }
}

/// Context object injected into each GraphQL request
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    pub greeting: Greeting,
    pub metadata: RequestMetadata,
}

impl RequestContext {
    pub fn new(greeting: Greeting, metadata: RequestMetadata) -> Self {
        Self { greeting, metadata }
    }
}
