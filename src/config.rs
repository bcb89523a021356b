//! Runtime configuration handed in from the hosting page

use serde::{Deserialize, Serialize};

pub const DEFAULT_REDIRECT_BASE: &str = "https://intopwa.xyofn8h7t.workers.dev";
pub const DEFAULT_SERVICE_WORKER_PATH: &str = "/sw.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Origin of the worker that turns a site into an installable app
    pub redirect_base: String,
    pub service_worker_path: String,
    /// Number of blank icon rows shown on first render
    pub initial_icon_rows: usize,
}

impl Config {
    /// Redirect base without a trailing slash, so `/a/` can be appended as-is
    pub fn redirect_base(&self) -> &str {
        self.redirect_base.trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redirect_base: DEFAULT_REDIRECT_BASE.to_string(),
            service_worker_path: DEFAULT_SERVICE_WORKER_PATH.to_string(),
            initial_icon_rows: 1,
        }
    }
}
