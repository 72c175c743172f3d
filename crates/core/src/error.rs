/// Startup configuration errors.
///
/// Any of these stops the server before it binds a socket.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {key} in environment")]
    Missing { key: &'static str },

    #[error("Failed to parse {key}: {reason}")]
    Malformed { key: &'static str, reason: String },
}
