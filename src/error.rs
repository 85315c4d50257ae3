//! Error types for valbar.

use thiserror::Error;

/// The main error type for valbar.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/TUI related errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// HTTP transport or decoding errors from a data source
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// A match or odds source reported a failure
    #[error("{0}")]
    Source(String),

    /// Preference store read/write errors
    #[error("Preference error: {0}")]
    Preference(String),

    /// Window host query/command errors
    #[error("Window error: {0}")]
    Window(String),

    /// Generic application error
    #[error("{0}")]
    Application(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new source error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create a new preference error.
    pub fn preference(msg: impl Into<String>) -> Self {
        Self::Preference(msg.into())
    }

    /// Create a new window error.
    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }

    /// Create a new application error.
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Check if this error is recoverable (the next refresh may succeed).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Source(_)
                | Self::Channel(_)
                | Self::Preference(_)
                | Self::Window(_)
        )
    }
}
