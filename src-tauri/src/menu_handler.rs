use tauri::{AppHandle, Manager};

use crate::{
    about_dialog, append_desktop_log, main_window,
    menu_actions::{self, MenuAction},
    url_prompt_window, ShellState,
};

pub fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = menu_actions::action_from_menu_id(menu_id) else {
        return;
    };

    match action {
        MenuAction::ChangeServerUrl => url_prompt_window::request_url_change(app_handle),
        MenuAction::Reload => main_window::reload_main_window(app_handle, append_desktop_log),
        MenuAction::HardReload => {
            main_window::hard_reload_main_window(app_handle, append_desktop_log)
        }
        MenuAction::Quit => {
            append_desktop_log("quit requested from menu");
            app_handle.exit(0);
        }
        MenuAction::ToggleFullscreen => {
            main_window::toggle_fullscreen(app_handle, append_desktop_log)
        }
        MenuAction::Zoom(command) => {
            let state = app_handle.state::<ShellState>();
            match state.apply_zoom(command) {
                Ok(zoom) => main_window::set_main_window_zoom(app_handle, zoom, append_desktop_log),
                Err(error) => append_desktop_log(&format!("zoom {command:?} skipped: {error}")),
            }
        }
        MenuAction::ToggleDevtools => main_window::toggle_devtools(app_handle, append_desktop_log),
        MenuAction::About => about_dialog::show_about_dialog(app_handle, append_desktop_log),
    }
}
