use tauri::{
    menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Wry,
};

use crate::{menu_actions, shell_locale, DEFAULT_SHELL_LOCALE};

fn menu_item(app_handle: &AppHandle, id: &str, text: &str) -> Result<MenuItem<Wry>, String> {
    MenuItem::with_id(
        app_handle,
        id,
        text,
        true,
        menu_actions::accelerator_for(id),
    )
    .map_err(|error| format!("Failed to create menu item {id}: {error}"))
}

fn separator(app_handle: &AppHandle) -> Result<PredefinedMenuItem<Wry>, String> {
    PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create menu separator: {error}"))
}

pub(crate) fn devtools_available() -> bool {
    cfg!(any(debug_assertions, feature = "devtools"))
}

#[cfg(target_os = "macos")]
fn app_submenu(app_handle: &AppHandle) -> Result<Submenu<Wry>, String> {
    let name = app_handle.package_info().name.clone();
    let about = PredefinedMenuItem::about(app_handle, None, None)
        .map_err(|error| format!("Failed to create about menu item: {error}"))?;
    let services = PredefinedMenuItem::services(app_handle, None)
        .map_err(|error| format!("Failed to create services menu item: {error}"))?;
    let hide = PredefinedMenuItem::hide(app_handle, None)
        .map_err(|error| format!("Failed to create hide menu item: {error}"))?;
    let hide_others = PredefinedMenuItem::hide_others(app_handle, None)
        .map_err(|error| format!("Failed to create hide others menu item: {error}"))?;
    let show_all = PredefinedMenuItem::show_all(app_handle, None)
        .map_err(|error| format!("Failed to create show all menu item: {error}"))?;
    let quit = PredefinedMenuItem::quit(app_handle, None)
        .map_err(|error| format!("Failed to create quit menu item: {error}"))?;

    Submenu::with_items(
        app_handle,
        name,
        true,
        &[
            &about,
            &separator(app_handle)?,
            &services,
            &separator(app_handle)?,
            &hide,
            &hide_others,
            &show_all,
            &separator(app_handle)?,
            &quit,
        ],
    )
    .map_err(|error| format!("Failed to build application submenu: {error}"))
}

pub fn build_app_menu(app_handle: &AppHandle) -> Result<Menu<Wry>, String> {
    let texts = shell_locale::shell_texts_for_locale(shell_locale::resolve_shell_locale(
        DEFAULT_SHELL_LOCALE,
    ));

    let change_url_item = menu_item(
        app_handle,
        menu_actions::MENU_CHANGE_SERVER_URL,
        texts.change_server_url,
    )?;
    let reload_item = menu_item(app_handle, menu_actions::MENU_RELOAD, texts.reload)?;
    let hard_reload_item =
        menu_item(app_handle, menu_actions::MENU_HARD_RELOAD, texts.hard_reload)?;
    let quit_item = menu_item(app_handle, menu_actions::MENU_QUIT, texts.quit)?;
    let file_menu = Submenu::with_items(
        app_handle,
        texts.menu_file,
        true,
        &[
            &change_url_item,
            &separator(app_handle)?,
            &reload_item,
            &hard_reload_item,
            &separator(app_handle)?,
            &quit_item,
        ],
    )
    .map_err(|error| format!("Failed to build file menu: {error}"))?;

    let fullscreen_item = menu_item(
        app_handle,
        menu_actions::MENU_TOGGLE_FULLSCREEN,
        texts.toggle_fullscreen,
    )?;
    let zoom_in_item = menu_item(app_handle, menu_actions::MENU_ZOOM_IN, texts.zoom_in)?;
    let zoom_out_item = menu_item(app_handle, menu_actions::MENU_ZOOM_OUT, texts.zoom_out)?;
    let reset_zoom_item =
        menu_item(app_handle, menu_actions::MENU_RESET_ZOOM, texts.reset_zoom)?;
    let view_separator = separator(app_handle)?;
    let devtools_separator = separator(app_handle)?;
    let devtools_item = menu_item(
        app_handle,
        menu_actions::MENU_TOGGLE_DEVTOOLS,
        texts.toggle_devtools,
    )?;

    let mut view_items: Vec<&dyn IsMenuItem<Wry>> = Vec::new();
    view_items.push(&fullscreen_item);
    view_items.push(&view_separator);
    view_items.push(&zoom_in_item);
    view_items.push(&zoom_out_item);
    view_items.push(&reset_zoom_item);
    if devtools_available() {
        view_items.push(&devtools_separator);
        view_items.push(&devtools_item);
    }
    let view_menu = Submenu::with_items(app_handle, texts.menu_view, true, &view_items)
        .map_err(|error| format!("Failed to build view menu: {error}"))?;

    let about_item = menu_item(app_handle, menu_actions::MENU_ABOUT, texts.about)?;
    let help_menu = Submenu::with_items(app_handle, texts.menu_help, true, &[&about_item])
        .map_err(|error| format!("Failed to build help menu: {error}"))?;

    #[cfg(target_os = "macos")]
    let menu = {
        let app_menu = app_submenu(app_handle)?;
        Menu::with_items(app_handle, &[&app_menu, &file_menu, &view_menu, &help_menu])
    };
    #[cfg(not(target_os = "macos"))]
    let menu = Menu::with_items(app_handle, &[&file_menu, &view_menu, &help_menu]);

    menu.map_err(|error| format!("Failed to build application menu: {error}"))
}
