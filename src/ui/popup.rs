/// Popup UI: send the active tab to a note, or edit the configuration

use super::components::{ConfigInput, StatusBanner};
use super::state::{PopupAction, PopupModel, SendDecision, View};
use crate::browser::{ChromeStorage, ChromeTabs, FetchTransport};
use crate::config::{ConfigField, NoteConfig};
use crate::operations::send_to_note;
use crate::settings::{DEFAULT_TARGET_NOTE, ENDPOINT_PLACEHOLDER, SUCCESS_DISMISS_MS, TOKEN_PLACEHOLDER};
use crate::storage::{load_config, save_config};
use gloo_timers::future::TimeoutFuture;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let model = use_reducer(PopupModel::default);

    // Load config on mount
    {
        let dispatcher = model.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let config = load_config(&ChromeStorage).await;
                dispatcher.dispatch(PopupAction::Loaded(config));
            });
            || ()
        });
    }

    // Send handler
    let on_send = {
        let model = model.clone();

        Callback::from(move |_| {
            let SendDecision::Start { config, attempt } = model.send_decision() else {
                model.dispatch(PopupAction::SendRequested);
                return;
            };

            let dispatcher = model.dispatcher();
            dispatcher.dispatch(PopupAction::SendRequested);

            spawn_local(async move {
                match send_to_note(&config, &ChromeTabs, &FetchTransport).await {
                    Ok(()) => {
                        dispatcher.dispatch(PopupAction::SendFinished(Ok(())));
                        TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
                        dispatcher.dispatch(PopupAction::SuccessExpired(attempt));
                    }
                    Err(e) => {
                        log::error!("Send failed: {}", e);
                        dispatcher.dispatch(PopupAction::SendFinished(Err(e.to_string())));
                    }
                }
            });
        })
    };

    let on_open_config = {
        let model = model.clone();
        Callback::from(move |_| model.dispatch(PopupAction::OpenConfig))
    };

    let on_edit = {
        let model = model.clone();
        Callback::from(move |(field, value): (ConfigField, String)| {
            model.dispatch(PopupAction::Edit(field, value));
        })
    };

    // Save handler
    let on_save = {
        let model = model.clone();

        Callback::from(move |_| {
            let draft = model.config.clone();
            let dispatcher = model.dispatcher();

            spawn_local(async move {
                match save_config(&ChromeStorage, &draft).await {
                    Ok(()) => dispatcher.dispatch(PopupAction::Saved(draft)),
                    Err(e) => {
                        log::error!("Save failed: {}", e);
                        dispatcher.dispatch(PopupAction::SaveFailed(e.to_string()));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let model = model.clone();
        Callback::from(move |_| model.dispatch(PopupAction::Cancel))
    };

    match model.view {
        View::Configuring => html! {
            <div class="popup popup-config">
                <h3 class="popup-title">{"Configuration"}</h3>

                <ConfigForm config={model.config.clone()} on_edit={on_edit} />

                <div class="button-row">
                    <Button onclick={on_save} variant={ButtonVariant::Primary}>
                        {"Save"}
                    </Button>
                    <Button onclick={on_cancel} variant={ButtonVariant::Secondary}>
                        {"Cancel"}
                    </Button>
                </div>

                <StatusBanner error={model.error.clone()} />
            </div>
        },
        View::Action => html! {
            <div class="popup popup-action">
                <div class="flex-column-gap">
                    <Button
                        onclick={on_send}
                        disabled={!model.can_send()}
                        variant={ButtonVariant::Primary}
                        block={true}
                    >
                        <span>{model.config.send_label()}</span>
                        if model.loading {
                            <Spinner />
                        }
                    </Button>

                    <Button
                        onclick={on_open_config}
                        disabled={!model.can_configure()}
                        variant={ButtonVariant::Secondary}
                        block={true}
                    >
                        {"Configure"}
                    </Button>

                    <StatusBanner error={model.error.clone()} success={model.success} />
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ConfigFormProps {
    config: NoteConfig,
    on_edit: Callback<(ConfigField, String)>,
}

#[function_component(ConfigForm)]
fn config_form(props: &ConfigFormProps) -> Html {
    let config = &props.config;
    let endpoint_hint = config.endpoint_problem().map(AttrValue::from);

    html! {
        <>
            <ConfigInput
                field={ConfigField::Endpoint}
                label="Endpoint URL"
                value={config.endpoint.clone()}
                placeholder={ENDPOINT_PLACEHOLDER}
                hint={endpoint_hint}
                on_edit={props.on_edit.clone()}
            />
            <ConfigInput
                field={ConfigField::Token}
                label="Auth Token (optional)"
                value={config.token.clone()}
                placeholder={TOKEN_PLACEHOLDER}
                password={true}
                on_edit={props.on_edit.clone()}
            />
            <ConfigInput
                field={ConfigField::TargetNote}
                label="Target Note"
                value={config.target_note.clone()}
                placeholder={DEFAULT_TARGET_NOTE}
                on_edit={props.on_edit.clone()}
            />
        </>
    }
}
