use crate::app_types::ZoomCommand;

pub const MENU_CHANGE_SERVER_URL: &str = "menu_change_server_url";
pub const MENU_RELOAD: &str = "menu_reload";
pub const MENU_HARD_RELOAD: &str = "menu_hard_reload";
pub const MENU_QUIT: &str = "menu_quit";
pub const MENU_TOGGLE_FULLSCREEN: &str = "menu_toggle_fullscreen";
pub const MENU_ZOOM_IN: &str = "menu_zoom_in";
pub const MENU_ZOOM_OUT: &str = "menu_zoom_out";
pub const MENU_RESET_ZOOM: &str = "menu_reset_zoom";
pub const MENU_TOGGLE_DEVTOOLS: &str = "menu_toggle_devtools";
pub const MENU_ABOUT: &str = "menu_about";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ChangeServerUrl,
    Reload,
    HardReload,
    Quit,
    ToggleFullscreen,
    Zoom(ZoomCommand),
    ToggleDevtools,
    About,
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_CHANGE_SERVER_URL => Some(MenuAction::ChangeServerUrl),
        MENU_RELOAD => Some(MenuAction::Reload),
        MENU_HARD_RELOAD => Some(MenuAction::HardReload),
        MENU_QUIT => Some(MenuAction::Quit),
        MENU_TOGGLE_FULLSCREEN => Some(MenuAction::ToggleFullscreen),
        MENU_ZOOM_IN => Some(MenuAction::Zoom(ZoomCommand::In)),
        MENU_ZOOM_OUT => Some(MenuAction::Zoom(ZoomCommand::Out)),
        MENU_RESET_ZOOM => Some(MenuAction::Zoom(ZoomCommand::Reset)),
        MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevtools),
        MENU_ABOUT => Some(MenuAction::About),
        _ => None,
    }
}

pub fn accelerator_for(menu_id: &str) -> Option<&'static str> {
    match menu_id {
        MENU_CHANGE_SERVER_URL => Some("CmdOrCtrl+L"),
        MENU_RELOAD => Some("CmdOrCtrl+R"),
        MENU_HARD_RELOAD => Some("CmdOrCtrl+Shift+R"),
        MENU_QUIT => Some("CmdOrCtrl+Q"),
        MENU_TOGGLE_FULLSCREEN => Some("F11"),
        MENU_ZOOM_IN => Some("CmdOrCtrl+="),
        MENU_ZOOM_OUT => Some("CmdOrCtrl+-"),
        MENU_RESET_ZOOM => Some("CmdOrCtrl+0"),
        MENU_TOGGLE_DEVTOOLS => Some("CmdOrCtrl+Alt+I"),
        _ => None,
    }
}
