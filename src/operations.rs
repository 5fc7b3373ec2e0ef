/// Sending the active tab's URL to a note

use crate::config::NoteConfig;
use crate::error::SendError;
use crate::tab_data::{TabSource, current_url};

/// One outbound POST, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl NoteRequest {
    pub fn new(config: &NoteConfig, tab_url: &str) -> NoteRequest {
        let mut headers = vec![("Content-Type".to_string(), "text/markdown".to_string())];

        if config.has_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", config.token)));
        }

        NoteRequest {
            url: config.target_url(),
            headers,
            body: tab_url.to_string(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Performs the POST and reports the response status.
///
/// `Err` carries the message of a network-level failure.
#[allow(async_fn_in_trait)]
pub trait NoteTransport {
    async fn post(&self, request: &NoteRequest) -> Result<u16, String>;
}

/// Send the active tab's URL to the configured note.
///
/// Makes at most one request and never retries.
pub async fn send_to_note<T, N>(config: &NoteConfig, tabs: &T, transport: &N) -> Result<(), SendError>
where
    T: TabSource,
    N: NoteTransport,
{
    if !config.is_configured() {
        return Err(SendError::Unconfigured);
    }

    let tab_url = current_url(tabs).await;
    if tab_url.is_empty() {
        return Err(SendError::NoActiveTab);
    }

    let request = NoteRequest::new(config, &tab_url);
    let status = transport.post(&request).await.map_err(SendError::Transport)?;

    if !(200..300).contains(&status) {
        return Err(SendError::HttpStatus(status));
    }

    log::debug!("Sent tab URL {}", tab_url);
    log::info!("Sent active tab to {}", request.url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_data::tests::FixedTab;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every request and answers with a canned result
    struct RecordingTransport {
        reply: Result<u16, String>,
        sent: RefCell<Vec<NoteRequest>>,
    }

    impl RecordingTransport {
        fn replying(reply: Result<u16, String>) -> Self {
            RecordingTransport {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl NoteTransport for RecordingTransport {
        async fn post(&self, request: &NoteRequest) -> Result<u16, String> {
            self.sent.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn configured(token: &str) -> NoteConfig {
        NoteConfig::new("http://localhost:27123", token, "File.md")
    }

    #[test]
    fn test_unconfigured_sends_nothing() {
        let tabs = FixedTab::url("https://example.com");
        let transport = RecordingTransport::replying(Ok(200));

        let result = block_on(send_to_note(&NoteConfig::default(), &tabs, &transport));

        assert_eq!(result, Err(SendError::Unconfigured));
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(tabs.queries.get(), 0);
    }

    #[test]
    fn test_no_active_tab_sends_nothing() {
        let tabs = FixedTab::answer(Ok(None));
        let transport = RecordingTransport::replying(Ok(200));

        let result = block_on(send_to_note(&configured(""), &tabs, &transport));

        assert_eq!(result, Err(SendError::NoActiveTab));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_tab_query_failure_is_no_active_tab() {
        let tabs = FixedTab::answer(Err("tabs API unavailable".to_string()));
        let transport = RecordingTransport::replying(Ok(200));

        let result = block_on(send_to_note(&configured(""), &tabs, &transport));

        assert_eq!(result, Err(SendError::NoActiveTab));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_sends_exactly_one_post() {
        let tabs = FixedTab::url("https://example.com");
        let transport = RecordingTransport::replying(Ok(204));

        let result = block_on(send_to_note(&configured(""), &tabs, &transport));

        assert_eq!(result, Ok(()));
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://localhost:27123/vault/File.md");
        assert_eq!(sent[0].body, "https://example.com");
        assert_eq!(sent[0].header("Content-Type"), Some("text/markdown"));
    }

    #[test]
    fn test_token_adds_authorization_header() {
        let tabs = FixedTab::url("https://example.com");
        let transport = RecordingTransport::replying(Ok(200));

        block_on(send_to_note(&configured("s3cret"), &tabs, &transport)).unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].header("Authorization"), Some("Bearer s3cret"));
    }

    #[test]
    fn test_empty_token_omits_authorization_header() {
        let request = NoteRequest::new(&configured(""), "https://example.com");

        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn test_http_error_carries_status() {
        let tabs = FixedTab::url("https://example.com");

        for status in [301, 401, 404, 500] {
            let transport = RecordingTransport::replying(Ok(status));
            let result = block_on(send_to_note(&configured(""), &tabs, &transport));

            assert_eq!(result, Err(SendError::HttpStatus(status)));
            assert_eq!(transport.sent.borrow().len(), 1);
        }
    }

    #[test]
    fn test_transport_failure_propagates_message() {
        let tabs = FixedTab::url("https://example.com");
        let transport = RecordingTransport::replying(Err("Failed to fetch".to_string()));

        let result = block_on(send_to_note(&configured(""), &tabs, &transport));

        assert_eq!(result, Err(SendError::Transport("Failed to fetch".to_string())));
        assert_eq!(transport.sent.borrow().len(), 1);
    }
}
