//! Errors raised at the fallible edges of the editor.
//!
//! Interaction handlers never fail: malformed input is logged and dropped at
//! the controller boundary. These variants surface only where the host asks
//! for something that can go wrong (parsing a payload, encoding an export,
//! reading configuration).

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("malformed component payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    #[error("layout export failed: {0}")]
    Export(#[source] serde_json::Error),
    #[error("invalid configuration: {0}")]
    ConfigParse(String),
}
