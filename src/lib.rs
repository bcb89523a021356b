/// intopwa web front end - turns any site into an installable app
/// Built with Rust + WASM + Yew

pub mod config;
pub mod error;
pub mod icon_rows;
pub mod navigation;
pub mod redirect;
pub mod service_worker;
pub mod ui;

use std::cell::RefCell;

use config::Config;
use redirect::FormState;
use service_worker::{Bootstrap, LoadHook};
use wasm_bindgen::prelude::*;
use yew::AppHandle;

thread_local! {
    // Keeps the page-lifetime `load` listener alive
    static SERVICE_WORKER_HOOK: RefCell<Option<LoadHook>> = const { RefCell::new(None) };
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// A mounted form; call `destroy` to unmount it and drop its handlers
#[wasm_bindgen]
pub struct AppMount {
    handle: Option<AppHandle<ui::App>>,
}

#[wasm_bindgen]
impl AppMount {
    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
    }
}

// Start the form on the landing page with the default configuration
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    start_with(Config::default())
}

#[wasm_bindgen]
pub fn start_app_with_config(config: JsValue) -> Result<(), JsValue> {
    start_with(parse_config(config)?)
}

/// Mount the form into the element with `root_id` without touching the service worker
#[wasm_bindgen]
pub fn mount(root_id: &str, config: JsValue) -> Result<AppMount, JsValue> {
    let config = parse_config(config)?;
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(root_id))
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {:?}", root_id)))?;

    let handle = yew::Renderer::<ui::App>::with_root_and_props(root, ui::AppProps { config }).render();
    Ok(AppMount {
        handle: Some(handle),
    })
}

// Re-export core redirect functions for JavaScript access
#[wasm_bindgen]
pub fn redirect_target(url: &str) -> Result<String, JsValue> {
    let request = FormState::new(url, Vec::new())
        .into_request()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(request.action_url(Config::default().redirect_base()))
}

#[wasm_bindgen]
pub fn plan_redirect(url: &str, icons: JsValue) -> Result<JsValue, JsValue> {
    let icons: Vec<String> = if icons.is_null() || icons.is_undefined() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(icons)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse icons: {:?}", e)))?
    };

    let request = FormState::new(url, icons)
        .into_request()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let plan = request.plan(Config::default().redirect_base());

    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {:?}", e)))
}

fn start_with(config: Config) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    yew::Renderer::<ui::App>::with_props(ui::AppProps {
        config: config.clone(),
    })
    .render();
    log::info!("Mounted create-app form");

    if let Bootstrap::Pending(hook) = service_worker::bootstrap(&window, &config.service_worker_path)? {
        SERVICE_WORKER_HOOK.with(|slot| *slot.borrow_mut() = Some(hook));
    }

    Ok(())
}

fn parse_config(config: JsValue) -> Result<Config, JsValue> {
    if config.is_null() || config.is_undefined() {
        return Ok(Config::default());
    }

    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {:?}", e)))
}
