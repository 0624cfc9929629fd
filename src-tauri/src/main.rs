#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod about_dialog;
mod app_constants;
mod app_runtime;
mod app_types;
mod exit_events;
mod external_links;
mod input_guard;
mod logging;
mod main_window;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod plugin_activation;
mod plugin_locator;
mod runtime_paths;
mod shell_config;
mod shell_locale;
mod url_prompt;
mod url_prompt_window;

pub(crate) use app_constants::*;
pub(crate) use app_types::{BridgeResult, ShellState, UrlPromptState};
pub(crate) use logging::{append_desktop_log, append_plugin_log, append_startup_log};

fn main() {
    app_runtime::run();
}
