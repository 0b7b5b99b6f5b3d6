//! Host configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `pkg/` is served from).
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default from the Leptos configuration
    ///
    /// # Errors
    ///
    /// Returns `HostError::InvalidPort` when `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("SITE_ROOT").ok().as_deref())
    }

    fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, HostError> {
        let port = parse_port(port)?;
        let site_root = site_root.map(str::trim).filter(|s| !s.is_empty()).map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
