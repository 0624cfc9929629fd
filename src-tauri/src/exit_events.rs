use tauri::ExitRequestApi;

use crate::{append_desktop_log, plugin_locator::Platform};

/// macOS apps stay alive with no windows open; an explicit exit code
/// (menu quit, `AppHandle::exit`) always ends the process.
pub(crate) fn should_keep_running(platform: Platform, exit_code: Option<i32>) -> bool {
    platform == Platform::MacOs && exit_code.is_none()
}

pub(crate) fn handle_exit_requested(exit_code: Option<i32>, api: &ExitRequestApi) {
    if should_keep_running(Platform::current(), exit_code) {
        append_desktop_log("all windows closed; keeping process alive until reopen");
        api.prevent_exit();
        return;
    }

    append_desktop_log(&format!(
        "desktop process exiting (code={})",
        exit_code.map_or_else(|| "none".to_string(), |code| code.to_string())
    ));
}

#[cfg(target_os = "macos")]
pub(crate) fn handle_reopen(app_handle: &tauri::AppHandle, has_visible_windows: bool) {
    if has_visible_windows {
        return;
    }

    if let Err(error) = crate::main_window::create_main_window(app_handle, append_desktop_log) {
        append_desktop_log(&format!("failed to recreate main window on reopen: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_keeps_running_when_last_window_closes() {
        assert!(should_keep_running(Platform::MacOs, None));
    }

    #[test]
    fn explicit_exit_is_never_prevented() {
        assert!(!should_keep_running(Platform::MacOs, Some(0)));
        assert!(!should_keep_running(Platform::Windows, Some(0)));
    }

    #[test]
    fn other_platforms_exit_when_last_window_closes() {
        assert!(!should_keep_running(Platform::Windows, None));
        assert!(!should_keep_running(Platform::Linux, None));
        assert!(!should_keep_running(Platform::Other, None));
    }
}
