//! Application configuration.
//!
//! Both configs read from environment variables; see the plinth config and
//! database modules for the variable names and defaults.

pub use plinth::config::ServerConfig;
pub use plinth::database::DatabaseConfig;
