//! Application-wide error types.
//!
//! Subsystems use their own `thiserror` enums ([`LookupError`],
//! [`CatalogError`], [`ChannelError`], [`ConfigError`]). This module wraps
//! them, with context, wherever the session or a command crosses a
//! subsystem boundary. The CLI entry points themselves use `anyhow`.
//!
//! [`LookupError`]: crate::lookup::LookupError
//! [`CatalogError`]: crate::catalog::CatalogError
//! [`ChannelError`]: crate::channel::ChannelError
//! [`ConfigError`]: crate::config::ConfigError
//!
//! # Example
//!
//! ```ignore
//! use vibe_display::error::{Result, ResultExt};
//!
//! fn build(config: &Config) -> Result<Router> {
//!     let http = catalog::http_client().with_context("building HTTP client")?;
//!     ...
//! }
//! ```

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Lookup table error
    #[error("Lookup error: {0}")]
    Lookup(#[from] crate::lookup::LookupError),

    /// Catalog client error
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Pub/sub channel error
    #[error("Channel error: {0}")]
    Channel(#[from] crate::channel::ChannelError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(ctx))
    }
}
