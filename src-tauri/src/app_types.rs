use std::sync::{Arc, Mutex};

use crate::{plugin_activation::PluginActivation, shell_config::ShellConfig, url_prompt};

pub(crate) const DEFAULT_ZOOM: f64 = 1.0;
pub(crate) const MIN_ZOOM: f64 = 0.1;
pub(crate) const ZOOM_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

pub(crate) fn next_zoom(current: f64, command: ZoomCommand) -> f64 {
    let next = match command {
        ZoomCommand::In => current + ZOOM_STEP,
        ZoomCommand::Out => (current - ZOOM_STEP).max(MIN_ZOOM),
        ZoomCommand::Reset => DEFAULT_ZOOM,
    };
    (next * 100.0).round() / 100.0
}

#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) config: Mutex<ShellConfig>,
    pub(crate) activation: PluginActivation,
    pub(crate) zoom: Mutex<f64>,
}

impl ShellState {
    pub(crate) fn new(config: ShellConfig, activation: PluginActivation) -> Self {
        Self {
            config: Mutex::new(config),
            activation,
            zoom: Mutex::new(DEFAULT_ZOOM),
        }
    }

    pub(crate) fn config_snapshot(&self) -> ShellConfig {
        self.config
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub(crate) fn target_url(&self) -> String {
        self.config_snapshot().target_url
    }

    pub(crate) fn set_target_url(&self, url: &str) -> Result<(), String> {
        let mut guard = self
            .config
            .lock()
            .map_err(|_| "Shell config lock poisoned.".to_string())?;
        guard.target_url = url.to_string();
        Ok(())
    }

    pub(crate) fn apply_zoom(&self, command: ZoomCommand) -> Result<f64, String> {
        let mut guard = self
            .zoom
            .lock()
            .map_err(|_| "Zoom state lock poisoned.".to_string())?;
        *guard = next_zoom(*guard, command);
        Ok(*guard)
    }
}

#[derive(Debug, Default)]
pub(crate) struct UrlPromptState {
    pub(crate) active: Mutex<Option<Arc<url_prompt::UrlPromptSession>>>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl BridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}
