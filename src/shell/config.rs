// Process configuration, read once at startup from the environment (and `.env`).

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

use crate::application::query_handlers::booking_queries::OwnerPagination;

pub const HOST_VAR: &str = "SHAREIT_HOST";
pub const PORT_VAR: &str = "SHAREIT_PORT";
pub const LEGACY_OWNER_PAGINATION_VAR: &str = "SHAREIT_LEGACY_OWNER_PAGINATION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub owner_pagination: OwnerPagination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 9090,
            owner_pagination: OwnerPagination::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{HOST_VAR} is not an IP address: {raw}"))?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a port number: {raw}"))?,
            None => defaults.port,
        };
        let legacy = match lookup(LEGACY_OWNER_PAGINATION_VAR) {
            Some(raw) => raw
                .parse::<bool>()
                .with_context(|| format!("{LEGACY_OWNER_PAGINATION_VAR} must be true or false: {raw}"))?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            owner_pagination: OwnerPagination::from_legacy_flag(legacy),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
