use tauri::{Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_plugin_log, append_startup_log, exit_events, logging, main_window,
    menu_handler, menu_setup, plugin_activation, plugin_locator::Platform, runtime_paths,
    shell_config::ShellConfig, url_prompt::PromptSignal, url_prompt_window, ShellState,
    UrlPromptState, DESKTOP_LOG_FILE, URL_PROMPT_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(logging::default_log_dir(), DESKTOP_LOG_FILE).display()
    ));

    let config = ShellConfig::from_env();
    append_startup_log(&format!(
        "shell config: url={} size={}x{} fullscreen={} resizable={}",
        config.target_url, config.width, config.height, config.fullscreen, config.resizable
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(UrlPromptState::default())
        .invoke_handler(tauri::generate_handler![
            crate::external_links::open_external_url,
            crate::url_prompt_window::url_prompt_confirm,
            crate::url_prompt_window::url_prompt_cancel,
            crate::url_prompt_window::url_prompt_key,
        ])
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref())
        })
        .on_window_event(|window, event| {
            if window.label() != URL_PROMPT_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::Destroyed = event {
                url_prompt_window::handle_prompt_signal(
                    window.app_handle(),
                    PromptSignal::WindowDestroyed,
                    append_desktop_log,
                );
            }
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();

            let plugins_dir = runtime_paths::resolve_plugins_dir(&app_handle);
            append_plugin_log(&format!("probing plugins dir: {}", plugins_dir.display()));
            let activation =
                plugin_activation::initialize_flash(Platform::current(), &plugins_dir, append_plugin_log);
            app.manage(ShellState::new(config, activation));

            match menu_setup::build_app_menu(&app_handle) {
                Ok(menu) => {
                    if let Err(error) = app_handle.set_menu(menu) {
                        append_startup_log(&format!("failed to install application menu: {error}"));
                    }
                }
                Err(error) => {
                    append_startup_log(&format!("failed to build application menu: {error}"))
                }
            }

            if let Err(error) = main_window::create_main_window(&app_handle, append_startup_log) {
                append_startup_log(&error);
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(code, &api);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows,
                ..
            } => {
                exit_events::handle_reopen(_app_handle, has_visible_windows);
            }
            _ => {}
        });
}
