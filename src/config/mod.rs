pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_header_value, validate_non_empty_string, validate_range, validate_url,
};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_UPSTREAM_URL: &str = "https://icanhazdadjoke.com/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("dadjoke-relay/", env!("CARGO_PKG_VERSION"));

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    config.bind_address()?;
    validate_url("upstream_url", config.upstream_url())?;
    validate_range(
        "timeout_seconds",
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECONDS,
    )?;
    validate_non_empty_string("user_agent", config.user_agent())?;
    validate_header_value("user_agent", config.user_agent())?;
    Ok(())
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::utils::validation::{validate_socket_addr, Validate};
    use clap::Parser;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "dadjoke-relay")]
    #[command(about = "Serves GET /joke by relaying a joke from an upstream JSON API")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_BIND)]
        pub bind: String,

        #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
        pub upstream_url: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        #[arg(long, default_value = DEFAULT_USER_AGENT)]
        pub user_agent: String,

        #[arg(long, help = "Load settings from a TOML file instead of flags")]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn bind_address(&self) -> Result<SocketAddr> {
            validate_socket_addr("bind", &self.bind)
        }

        fn upstream_url(&self) -> &str {
            &self.upstream_url
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }

        fn user_agent(&self) -> &str {
            &self.user_agent
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_provider(self)
        }
    }

}
