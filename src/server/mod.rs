mod config;
mod http;

pub use config::{expand_env_vars, LoggingSection, ServerConfig, ServerSection, CONFIG_FILES};
pub use http::CatalogServer;
