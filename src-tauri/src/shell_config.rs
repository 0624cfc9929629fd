use std::env;

use crate::{DEFAULT_TARGET_URL, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, TARGET_URL_ENV};

const WIDTH_ENV: &str = "FLASH_SHELL_WIDTH";
const HEIGHT_ENV: &str = "FLASH_SHELL_HEIGHT";
const FULLSCREEN_ENV: &str = "FLASH_SHELL_FULLSCREEN";

/// Window and page settings owned by the shell for the whole process.
///
/// Built once from the environment at startup; only the URL prompt
/// rewrites `target_url` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellConfig {
    pub(crate) target_url: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) fullscreen: bool,
    pub(crate) resizable: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            fullscreen: true,
            resizable: true,
        }
    }
}

impl ShellConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            target_url: normalize_target_url(lookup(TARGET_URL_ENV).as_deref()),
            width: parse_dimension(lookup(WIDTH_ENV).as_deref()).unwrap_or(defaults.width),
            height: parse_dimension(lookup(HEIGHT_ENV).as_deref()).unwrap_or(defaults.height),
            fullscreen: parse_flag(lookup(FULLSCREEN_ENV).as_deref())
                .unwrap_or(defaults.fullscreen),
            resizable: defaults.resizable,
        }
    }
}

pub(crate) fn normalize_target_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_TARGET_URL.to_string(),
    }
}

fn parse_dimension(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
