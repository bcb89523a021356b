//! Capability-gated service worker registration

use crate::error::ServiceWorkerError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Event, ServiceWorkerRegistration, Window};

/// `'serviceWorker' in navigator`
pub fn is_supported(window: &Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false)
}

/// Register the worker script and wait for the browser's answer
pub async fn register(window: &Window, script_path: &str) -> Result<ServiceWorkerRegistration, ServiceWorkerError> {
    let promise = window.navigator().service_worker().register(script_path);

    JsFuture::from(promise)
        .await
        .and_then(|registration| registration.dyn_into::<ServiceWorkerRegistration>())
        .map_err(|e| ServiceWorkerError::RegistrationFailed(describe_js_error(&e)))
}

/// Fire-and-forget registration; the outcome only reaches the console
pub fn register_in_background(window: Window, script_path: String) {
    spawn_local(async move {
        match register(&window, &script_path).await {
            Ok(_) => log::info!("ServiceWorker registration successful"),
            Err(e) => log::warn!("{}", e),
        }
    });
}

/// A pending `load` listener that registers the worker once the page is loaded.
///
/// Dropping the hook detaches the listener.
pub struct LoadHook {
    window: Window,
    callback: Closure<dyn FnMut(Event)>,
}

impl LoadHook {
    pub fn attach(window: &Window, script_path: String) -> Result<LoadHook, JsValue> {
        let target = window.clone();
        let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_event| {
            register_in_background(target.clone(), script_path.clone());
        }));

        window.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref())?;

        Ok(LoadHook {
            window: window.clone(),
            callback,
        })
    }
}

impl Drop for LoadHook {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("load", self.callback.as_ref().unchecked_ref());
    }
}

/// What the bootstrapper did
pub enum Bootstrap {
    /// No service worker support, nothing registered
    Unsupported,
    /// The page had already loaded, registration is underway
    Started,
    /// Waiting for the `load` event
    Pending(LoadHook),
}

/// Register the worker after page load when the browser supports it
pub fn bootstrap(window: &Window, script_path: &str) -> Result<Bootstrap, JsValue> {
    let ready_state = window
        .document()
        .map(|document| document.ready_state())
        .unwrap_or_default();

    match next_step(is_supported(window), &ready_state) {
        Step::Skip => {
            log::debug!("ServiceWorker not supported, skipping registration");
            Ok(Bootstrap::Unsupported)
        }
        Step::RegisterNow => {
            register_in_background(window.clone(), script_path.to_string());
            Ok(Bootstrap::Started)
        }
        Step::WaitForLoad => LoadHook::attach(window, script_path.to_string()).map(Bootstrap::Pending),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Skip,
    RegisterNow,
    WaitForLoad,
}

/// Decide how to register given support and `document.readyState`
pub fn next_step(supported: bool, ready_state: &str) -> Step {
    if !supported {
        return Step::Skip;
    }

    // The wasm module often initializes after `load` has already fired
    if ready_state == "complete" {
        Step::RegisterNow
    } else {
        Step::WaitForLoad
    }
}

fn describe_js_error(error: &JsValue) -> String {
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}
