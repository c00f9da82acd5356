//! Middleware components for Critic API
//!
//! This module provides request inspection helpers used by the HTTP
//! handlers:
//! - `extract_client_ip`: Resolve the client address behind proxies
//! - `request_metadata`: Build the transport metadata for a GraphQL request

pub mod request_metadata;

pub use request_metadata::{extract_client_ip, extract_user_agent, request_metadata};
