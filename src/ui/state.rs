/// Popup state machine

use crate::config::{ConfigField, NoteConfig};
use crate::settings::{MSG_CONFIGURE_FIRST, MSG_SEND_FAILED};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Action,
    Configuring,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupModel {
    pub view: View,
    /// Stored config has been read; controls stay inert until then
    pub loaded: bool,
    /// Working copy: edited by the form, used by sends
    pub config: NoteConfig,
    /// Last loaded or persisted record
    pub saved: NoteConfig,
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    /// Number of sends started so far
    pub attempt: u32,
}

/// What pressing the send button leads to
#[derive(Debug, Clone, PartialEq)]
pub enum SendDecision {
    /// Control is inert: not loaded yet, a send is in flight, or not in the action view
    Ignore,
    /// Endpoint missing: switch to the form, no request
    Blocked,
    /// Issue one request with this config; `attempt` keys the success timer
    Start { config: NoteConfig, attempt: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    Loaded(NoteConfig),
    SendRequested,
    SendFinished(Result<(), String>),
    SuccessExpired(u32),
    OpenConfig,
    Edit(ConfigField, String),
    Saved(NoteConfig),
    SaveFailed(String),
    Cancel,
}

impl PopupModel {
    pub fn apply(mut self, action: PopupAction) -> PopupModel {
        match action {
            PopupAction::Loaded(config) => {
                if self.loaded {
                    return self;
                }
                self.loaded = true;
                self.saved = config.clone();
                self.config = config;
                self.view = View::Action;
                self.error = None;
            }
            PopupAction::SendRequested => match self.send_decision() {
                SendDecision::Ignore => {}
                SendDecision::Blocked => {
                    self.view = View::Configuring;
                    self.error = Some(MSG_CONFIGURE_FIRST.to_string());
                }
                SendDecision::Start { attempt, .. } => {
                    self.loading = true;
                    self.error = None;
                    self.success = false;
                    self.attempt = attempt;
                }
            },
            PopupAction::SendFinished(result) => {
                self.loading = false;
                match result {
                    Ok(()) => self.success = true,
                    Err(message) if message.is_empty() => self.error = Some(MSG_SEND_FAILED.to_string()),
                    Err(message) => self.error = Some(message),
                }
            }
            PopupAction::SuccessExpired(attempt) => {
                if attempt == self.attempt {
                    self.success = false;
                }
            }
            PopupAction::OpenConfig => {
                if self.can_configure() {
                    self.view = View::Configuring;
                }
            }
            PopupAction::Edit(field, value) => {
                if self.view == View::Configuring {
                    self.config.set(field, value);
                }
            }
            PopupAction::Saved(config) => {
                self.saved = config.clone();
                self.config = config;
                self.view = View::Action;
                self.error = None;
            }
            PopupAction::SaveFailed(message) => {
                self.error = Some(format!("Failed to save configuration: {}", message));
            }
            PopupAction::Cancel => {
                self.config = self.saved.clone();
                self.view = View::Action;
            }
        }
        self
    }

    /// Outcome of `SendRequested` in the current state
    pub fn send_decision(&self) -> SendDecision {
        if !self.can_send() {
            SendDecision::Ignore
        } else if !self.config.is_configured() {
            SendDecision::Blocked
        } else {
            SendDecision::Start {
                config: self.config.clone(),
                attempt: self.attempt + 1,
            }
        }
    }

    /// The send control is usable
    pub fn can_send(&self) -> bool {
        self.loaded && self.view == View::Action && !self.loading
    }

    pub fn can_configure(&self) -> bool {
        self.loaded && self.view == View::Action
    }
}

impl Reducible for PopupModel {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}
