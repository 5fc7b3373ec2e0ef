/// Reusable UI components

use crate::config::ConfigField;
use crate::settings::MSG_SENT;
use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfigInputProps {
    pub field: ConfigField,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(false)]
    pub password: bool,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    pub on_edit: Callback<(ConfigField, String)>,
}

/// Labelled text input bound to one config field
#[function_component(ConfigInput)]
pub fn config_input(props: &ConfigInputProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((field, input.value()));
            }
        })
    };

    html! {
        <div class="config-field">
            <label class="config-label">{props.label.clone()}</label>
            <input
                name={props.field.key()}
                type={if props.password { "password" } else { "text" }}
                class="config-input"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(hint) = &props.hint {
                <p class="config-hint">{hint.clone()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub success: bool,
}

/// Error and success banners
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusProps) -> Html {
    html! {
        <>
            if let Some(err) = &props.error {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err.clone()}
                </Alert>
            }
            if props.success {
                <Alert r#type={AlertType::Success} title={MSG_SENT} inline={true}>
                </Alert>
            }
        </>
    }
}
