pub mod client;

pub use crate::domain::model::JokeResponse;
pub use crate::domain::ports::{ConfigProvider, JokeSource};
pub use crate::utils::error::Result;
