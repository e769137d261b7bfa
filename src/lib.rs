pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::{client::JokeClient, JokeResponse, JokeSource};
pub use server::{build_router, AppState};
pub use utils::error::{RelayError, Result};
