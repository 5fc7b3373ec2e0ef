// Error types surfaced to the popup

/// Why sending the active tab to the note failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("Endpoint not configured")]
    Unconfigured,
    #[error("Could not get current tab URL")]
    NoActiveTab,
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Backend(String),
    #[error("could not encode record: {0}")]
    Encode(String),
}
