use thiserror::Error;

/// Errors that can occur while loading or saving a configuration snapshot.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read configuration file '{path}': {message}")]
    ReadError { path: String, message: String },

    #[error("Could not write configuration file '{path}': {message}")]
    WriteError { path: String, message: String },

    #[error("Failed to parse configuration JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to encode configuration JSON: {0}")]
    JsonEncodeError(String),
}

/// Errors that can occur when rendering a wire document for the simulator.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to encode wire document as JSON: {0}")]
    JsonError(String),

    #[error("Failed to write simulator XML: {0}")]
    XmlError(String),
}
