//! Server configuration.
//!
//! Values are layered with figment, later layers overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `taskdeck.toml` in the working directory, if present
//! 3. the bare `PORT` environment variable
//! 4. `TASKDECK_*` environment variables (`TASKDECK_HOST`,
//!    `TASKDECK_PORT`, `TASKDECK_STATIC_DIR`, `TASKDECK_SEED_DEMO_TASKS`)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// TCP port to listen on.
    pub port: u16,
    /// Directory served for every path outside the API.
    pub static_dir: PathBuf,
    /// Whether to start with the demo task list.
    pub seed_demo_tasks: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            static_dir: PathBuf::from("public"),
            seed_demo_tasks: true,
        }
    }
}

impl ServerConfig {
    /// Optional configuration file read from the working directory.
    pub const FILE_NAME: &'static str = "taskdeck.toml";

    /// Prefix for environment overrides.
    pub const ENV_PREFIX: &'static str = "TASKDECK_";

    /// Returns the layered configuration sources.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(Self::FILE_NAME))
            .merge(Env::raw().only(&["PORT"]))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Loads the configuration from all layers.
    ///
    /// # Errors
    ///
    /// Returns [`figment::Error`] when a layer holds a value of the wrong
    /// type or the configuration file cannot be parsed.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
