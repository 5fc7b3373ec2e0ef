/// The active browser tab
use serde::{Deserialize, Serialize};

/// The focused tab of the current window, as reported by chrome.tabs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveTab {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Something that can tell us which tab is active
#[allow(async_fn_in_trait)]
pub trait TabSource {
    async fn active_tab(&self) -> Result<Option<ActiveTab>, String>;
}

/// URL of the active tab, or an empty string when there is none.
///
/// Callers treat the empty string as a failure; there is no retry.
pub async fn current_url<T: TabSource>(source: &T) -> String {
    match source.active_tab().await {
        Ok(Some(tab)) => tab.url.unwrap_or_default(),
        Ok(None) => String::new(),
        Err(e) => {
            log::warn!("Active tab query failed: {}", e);
            String::new()
        }
    }
}
