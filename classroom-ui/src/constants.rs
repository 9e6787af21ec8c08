// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use classroom_client::{LoopbackProvider, VideoProvider};
use classroom_types::{truthy, ClassroomCatalog};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Which call backend the app talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// The hosted provider's browser SDK.
    #[default]
    Daily,
    /// In-memory call, no media.
    Loopback,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "videoProvider")]
    #[serde(default)]
    pub video_provider: ProviderKind,
    /// JSON array of classrooms replacing the default six.
    #[serde(rename = "classroomsJson")]
    #[serde(default)]
    pub classrooms_json: Option<String>,
    #[serde(rename = "maxParticipants")]
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(rename = "instructorModeEnabled")]
    #[serde(default)]
    pub instructor_mode_enabled: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No browser window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Classrooms shown in the lobby.
///
/// `classroomsJson` replaces the default catalog; `maxParticipants` caps the
/// default rooms.
pub fn classroom_catalog() -> Result<ClassroomCatalog, String> {
    let config = app_config()?;
    if let Some(json) = config.classrooms_json.as_deref().filter(|j| !j.trim().is_empty()) {
        return ClassroomCatalog::from_json(json).map_err(|e| format!("Invalid classroomsJson: {e}"));
    }
    let catalog = ClassroomCatalog::default();
    match config.max_participants {
        Some(max) => with_capacity(&catalog, max),
        None => Ok(catalog),
    }
}

fn with_capacity(catalog: &ClassroomCatalog, max_capacity: u32) -> Result<ClassroomCatalog, String> {
    let rooms = catalog
        .all()
        .iter()
        .cloned()
        .map(|mut room| {
            room.max_capacity = max_capacity;
            room
        })
        .collect();
    ClassroomCatalog::new(rooms).map_err(|e| format!("Invalid maxParticipants: {e}"))
}

pub fn instructor_mode_enabled() -> bool {
    app_config()
        .ok()
        .and_then(|c| c.instructor_mode_enabled)
        .map_or(true, |v| truthy(Some(v.as_str())))
}

/// Classmates seeded into the loopback call.
pub const FAKE_PEER_NAMES: [&str; 4] = ["Grace", "Alan", "Barbara", "Edsger"];

pub fn video_provider() -> Rc<dyn VideoProvider> {
    let kind = app_config().map(|c| c.video_provider).unwrap_or_default();
    if cfg!(feature = "fake-peers") || kind == ProviderKind::Loopback {
        log::info!("Using loopback video provider");
        return Rc::new(LoopbackProvider::with_remotes(&FAKE_PEER_NAMES));
    }
    hosted_provider()
}

#[cfg(target_arch = "wasm32")]
fn hosted_provider() -> Rc<dyn VideoProvider> {
    Rc::new(classroom_client::JsCallProvider::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn hosted_provider() -> Rc<dyn VideoProvider> {
    log::warn!("Hosted provider needs a browser; falling back to loopback");
    Rc::new(LoopbackProvider::new())
}
