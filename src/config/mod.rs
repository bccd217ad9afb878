/// Default configuration template and file creation.
pub mod default;

/// Configuration error types.
pub mod error;

/// Configuration file loader.
pub mod loader;

/// TOML configuration schema types.
pub mod schema;

/// Config directory resolution utilities.
pub mod xdg;
