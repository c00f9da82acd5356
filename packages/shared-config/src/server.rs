//! HTTP listener configuration types

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::{parse_env, ConfigResult};

/// Default port the GraphQL listener binds to
pub const DEFAULT_PORT: u16 = 4000;

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: IpAddr,

    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load listener configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            host: parse_env("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_env("PORT", DEFAULT_PORT)?,
        })
    }

    /// Socket address to bind the listener to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}
