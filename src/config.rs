//! Library-wide defaults, keyed by component.
//!
//! A [`GlobalConfig`] is provided once near the root of the app with
//! [`ConfigProvider`]; drawers read their slice through [`use_drawer_config`].

use anyhow::Context;
use dioxus::{logger::tracing::debug, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalConfig {
    pub drawer: DrawerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawerConfig {
    /// Label of the default confirm button. Empty hides the button.
    pub confirm: String,
    /// Label of the default cancel button. Empty hides the button.
    pub cancel: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            confirm: "Confirm".to_string(),
            cancel: "Cancel".to_string(),
        }
    }
}

impl GlobalConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid component configuration")
    }
}

/// Loads `config.json` from the platform config directory.
///
/// A missing file yields the defaults.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_config() -> anyhow::Result<GlobalConfig> {
    use directories_next::ProjectDirs;
    use std::path::PathBuf;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "N K", "tdrawer") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    let path = base.join("config.json");
    match tokio::fs::read_to_string(&path).await {
        Ok(data) => GlobalConfig::from_json(&data)
            .with_context(|| format!("reading {}", path.display())),
        Err(e) => {
            debug!("no config at {}: {e}", path.display());
            Ok(GlobalConfig::default())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_config() -> anyhow::Result<GlobalConfig> {
    Ok(GlobalConfig::default())
}

/// Makes `config` available to every component below.
#[component]
pub fn ConfigProvider(config: GlobalConfig, children: Element) -> Element {
    let mut ctx = use_context_provider(|| Signal::new(config.clone()));
    use_effect(use_reactive((&config,), move |(config,)| {
        if *ctx.peek() != config {
            ctx.set(config);
        }
    }));
    rsx! {
        {children}
    }
}

/// The drawer defaults from the nearest [`ConfigProvider`], or the built-in
/// ones when there is none.
pub fn use_drawer_config() -> DrawerConfig {
    match try_use_context::<Signal<GlobalConfig>>() {
        Some(ctx) => ctx.read().drawer.clone(),
        None => DrawerConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_both_labels() {
        let cfg = GlobalConfig::default();
        assert_eq!(cfg.drawer.confirm, "Confirm");
        assert_eq!(cfg.drawer.cancel, "Cancel");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GlobalConfig::from_json(r#"{"drawer": {"confirm": "OK"}}"#).unwrap();
        assert_eq!(cfg.drawer.confirm, "OK");
        assert_eq!(cfg.drawer.cancel, "Cancel");

        let cfg = GlobalConfig::from_json("{}").unwrap();
        assert_eq!(cfg, GlobalConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = GlobalConfig::from_json("{drawer:").unwrap_err();
        assert!(err.to_string().contains("invalid component configuration"));
    }
}
