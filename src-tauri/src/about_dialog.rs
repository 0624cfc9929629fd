use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::{ShellState, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE};

const FLASH_NOT_INSTALLED: &str = "Not installed";

pub(crate) fn about_detail(
    tauri_version: &str,
    webview_version: &str,
    flash_version: Option<&str>,
) -> String {
    format!(
        "Tauri: {tauri_version}\nWebView: {webview_version}\nFlash: {}",
        flash_version.unwrap_or(FLASH_NOT_INSTALLED)
    )
}

pub(crate) fn show_about_dialog<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let flash_version = app_handle
        .try_state::<ShellState>()
        .and_then(|state| state.activation.version_label());
    let webview_version = tauri::webview_version().unwrap_or_else(|error| {
        log(&format!("failed to read webview version: {error}"));
        "unknown".to_string()
    });
    let detail = about_detail(tauri::VERSION, &webview_version, flash_version);

    let mut dialog = app_handle
        .dialog()
        .message(format!("{MAIN_WINDOW_TITLE}\n\n{detail}"))
        .title(format!("About {MAIN_WINDOW_TITLE}"))
        .kind(MessageDialogKind::Info);
    if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        dialog = dialog.parent(&window);
    }
    dialog.show(|_| {});
}
