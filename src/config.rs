/// The persisted configuration record

use crate::settings::DEFAULT_TARGET_NOTE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Where captured URLs are sent.
///
/// An empty `endpoint` means the popup has not been configured yet, and an
/// empty `token` means requests go out without an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteConfig {
    pub endpoint: String,
    pub token: String,
    pub target_note: String,
}

/// Fields editable from the configuration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Endpoint,
    Token,
    TargetNote,
}

impl NoteConfig {
    pub fn new(endpoint: &str, token: &str, target_note: &str) -> Self {
        NoteConfig {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            target_note: target_note.to_string(),
        }
    }

    /// Build a config from whatever is in storage, field by field.
    ///
    /// String fields in `stored` win; missing or mistyped fields keep their
    /// default. Anything that is not a JSON object yields the defaults.
    pub fn from_stored(stored: &Value) -> Self {
        let mut config = NoteConfig::default();

        let Some(record) = stored.as_object() else {
            if !stored.is_null() {
                log::warn!("Ignoring stored config that is not an object");
            }
            return config;
        };

        for field in [ConfigField::Endpoint, ConfigField::Token, ConfigField::TargetNote] {
            match record.get(field.key()) {
                Some(Value::String(value)) => config.set(field, value.clone()),
                Some(Value::Null) | None => {}
                Some(_) => log::warn!("Ignoring stored config field '{}' of wrong type", field.key()),
            }
        }

        config
    }

    pub fn set(&mut self, field: ConfigField, value: String) {
        match field {
            ConfigField::Endpoint => self.endpoint = value,
            ConfigField::Token => self.token = value,
            ConfigField::TargetNote => self.target_note = value,
        }
    }

    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Endpoint => &self.endpoint,
            ConfigField::Token => &self.token,
            ConfigField::TargetNote => &self.target_note,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// `{endpoint}/vault/{targetNote}`, verbatim
    pub fn target_url(&self) -> String {
        format!("{}/vault/{}", self.endpoint, self.target_note)
    }

    /// Label for the send button
    pub fn send_label(&self) -> String {
        if self.target_note.is_empty() {
            "Send to File".to_string()
        } else {
            format!("Send to {}", self.target_note)
        }
    }

    /// Advisory check of the endpoint shown under the form field.
    /// Never blocks saving or sending.
    pub fn endpoint_problem(&self) -> Option<&'static str> {
        if self.endpoint.is_empty() {
            return None;
        }

        match Url::parse(&self.endpoint) {
            Ok(url) if !matches!(url.scheme(), "http" | "https") => {
                Some("Endpoint should use http:// or https://")
            }
            Ok(url) if url.host_str().is_none() => Some("Endpoint is missing a host"),
            Ok(_) => None,
            Err(_) => Some("Endpoint is not a valid URL"),
        }
    }
}

impl ConfigField {
    /// Key of the field in the stored record
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Endpoint => "endpoint",
            ConfigField::Token => "token",
            ConfigField::TargetNote => "targetNote",
        }
    }
}

impl Default for NoteConfig {
    fn default() -> Self {
        NoteConfig::new("", "", DEFAULT_TARGET_NOTE)
    }
}
