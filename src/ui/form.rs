//! The create-app form: target URL, icon rows and the submit button

use crate::config::Config;
use crate::error::FormError;
use crate::icon_rows::IconRows;
use crate::navigation::{alert_user, submit_redirect};
use crate::redirect::FormState;
use crate::ui::components::IconRowField;
use patternfly_yew::prelude::*;
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let target_url = use_state(String::new);
    let initial_rows = props.config.initial_icon_rows;
    let icon_rows = use_state(move || IconRows::with_blank_rows(initial_rows));

    let on_url_input = {
        let target_url = target_url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                target_url.set(input.value());
            }
        })
    };

    // Add icon row handler
    let on_add_icon = {
        let icon_rows = icon_rows.clone();
        Callback::from(move |_: MouseEvent| {
            let mut rows = (*icon_rows).clone();
            rows.add();
            icon_rows.set(rows);
        })
    };

    let on_icon_input = {
        let icon_rows = icon_rows.clone();
        Callback::from(move |(id, value): (Uuid, String)| {
            let mut rows = (*icon_rows).clone();
            if rows.set_value(id, value) {
                icon_rows.set(rows);
            }
        })
    };

    let on_remove_icon = {
        let icon_rows = icon_rows.clone();
        Callback::from(move |id: Uuid| {
            let mut rows = (*icon_rows).clone();
            if rows.remove(id) {
                icon_rows.set(rows);
            }
        })
    };

    // Create app handler
    let on_create_app = {
        let target_url = target_url.clone();
        let icon_rows = icon_rows.clone();
        let config = props.config.clone();

        Callback::from(move |_: MouseEvent| {
            let form = FormState::new((*target_url).clone(), icon_rows.values());
            submit(form, &config);
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="form-title">{"Turn a site into an app"}</h1>

            <input
                id="urlInput"
                type="text"
                class="pf-v5-c-form-control"
                placeholder="Enter website URL"
                value={(*target_url).clone()}
                oninput={on_url_input}
            />

            <div id="iconFields" class="flex-column-gap">
                {for icon_rows.iter().map(|row| html! {
                    <IconRowField
                        key={row.id.to_string()}
                        id={row.id}
                        value={row.value.clone()}
                        on_input={on_icon_input.clone()}
                        on_remove={on_remove_icon.clone()}
                    />
                })}
            </div>

            <div class="flex-column-gap">
                <Button id="addIconButton" onclick={on_add_icon} variant={ButtonVariant::Secondary}>
                    {"Add icon"}
                </Button>
                <Button id="createAppButton" onclick={on_create_app} variant={ButtonVariant::Primary} block={true}>
                    {"Create app"}
                </Button>
            </div>
        </div>
    }
}

/// Validate the captured form and either navigate or tell the user what is wrong
pub fn submit(form: FormState, config: &Config) {
    let request = match form.into_request() {
        Ok(request) => request,
        Err(err) => {
            if let FormError::InvalidUrl { input, source } = &err {
                log::error!("Invalid URL {:?}: {}", input, source);
            }
            alert_user(&err.to_string());
            return;
        }
    };

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("No document to submit the redirect form from");
        return;
    };

    if let Err(e) = submit_redirect(&document, &request, config) {
        log::error!("Failed to submit redirect form: {:?}", e);
    }
}
