//! DOM side effects: synthetic form submission and user alerts

use crate::config::Config;
use crate::redirect::RedirectRequest;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Build the POST form for a redirect without attaching it to the page
pub fn build_form(
    document: &Document,
    request: &RedirectRequest,
    config: &Config,
) -> Result<HtmlFormElement, JsValue> {
    let form: HtmlFormElement = document.create_element("form")?.dyn_into()?;
    form.set_method("POST");
    form.set_action(&request.action_url(config.redirect_base()));

    for (name, value) in request.form_fields() {
        let field: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        field.set_type("hidden");
        field.set_name(name);
        field.set_value(value);
        form.append_child(&field)?;
    }

    Ok(form)
}

/// Attach, submit and detach the form. Navigation starts on submit.
pub fn submit_redirect(
    document: &Document,
    request: &RedirectRequest,
    config: &Config,
) -> Result<(), JsValue> {
    let form = build_form(document, request, config)?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    attach_and_submit(&body, &form)?;

    log::debug!("Submitted redirect form to {}", form.action());
    Ok(())
}

/// Submit `form` from inside `body`; the form is detached again even when submit throws
pub fn attach_and_submit(body: &HtmlElement, form: &HtmlFormElement) -> Result<(), JsValue> {
    body.append_child(form)?;
    let submitted = form.submit();
    body.remove_child(form)?;
    submitted
}

/// Blocking modal alert; falls back to the log when there is no window
pub fn alert_user(message: &str) {
    let shown = web_sys::window()
        .map(|window| window.alert_with_message(message).is_ok())
        .unwrap_or(false);

    if !shown {
        log::warn!("Could not show alert: {}", message);
    }
}
