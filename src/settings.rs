// Compile-time settings for the popup

/// Key of the configuration record in chrome.storage.local
pub const STORAGE_KEY: &str = "obsidianConfig";

pub const DEFAULT_TARGET_NOTE: &str = "File.md";

/// How long the "sent" banner stays visible
pub const SUCCESS_DISMISS_MS: u32 = 2000;

pub const ENDPOINT_PLACEHOLDER: &str = "http://localhost:27123";
pub const TOKEN_PLACEHOLDER: &str = "Bearer token";

// User-facing messages
pub const MSG_CONFIGURE_FIRST: &str = "Please configure the endpoint first";
pub const MSG_SEND_FAILED: &str = "Failed to send URL";
pub const MSG_SENT: &str = "URL sent successfully!";
