use std::env;

const LOCALE_ENV_KEYS: [&str; 3] = ["FLASH_SHELL_LOCALE", "LC_ALL", "LANG"];

#[derive(Debug, Clone, Copy)]
pub struct ShellTexts {
    pub menu_file: &'static str,
    pub menu_view: &'static str,
    pub menu_help: &'static str,
    pub change_server_url: &'static str,
    pub reload: &'static str,
    pub hard_reload: &'static str,
    pub quit: &'static str,
    pub toggle_fullscreen: &'static str,
    pub zoom_in: &'static str,
    pub zoom_out: &'static str,
    pub reset_zoom: &'static str,
    pub toggle_devtools: &'static str,
    pub about: &'static str,
    pub url_prompt_title: &'static str,
}

pub fn shell_texts_for_locale(locale: &str) -> ShellTexts {
    if locale == "zh-CN" {
        return ShellTexts {
            menu_file: "文件",
            menu_view: "视图",
            menu_help: "帮助",
            change_server_url: "更改服务器地址",
            reload: "重新加载",
            hard_reload: "清除站点数据并重新加载",
            quit: "退出",
            toggle_fullscreen: "切换全屏",
            zoom_in: "放大",
            zoom_out: "缩小",
            reset_zoom: "重置缩放",
            toggle_devtools: "切换开发者工具",
            about: "关于",
            url_prompt_title: "输入服务器地址",
        };
    }

    ShellTexts {
        menu_file: "File",
        menu_view: "View",
        menu_help: "Help",
        change_server_url: "Change Server URL",
        reload: "Reload",
        hard_reload: "Clear Site Data and Reload",
        quit: "Quit",
        toggle_fullscreen: "Toggle Fullscreen",
        zoom_in: "Zoom In",
        zoom_out: "Zoom Out",
        reset_zoom: "Reset Zoom",
        toggle_devtools: "Toggle Developer Tools",
        about: "About",
        url_prompt_title: "Enter Server URL",
    }
}

pub fn resolve_shell_locale(default_shell_locale: &'static str) -> &'static str {
    for env_key in LOCALE_ENV_KEYS {
        if let Ok(value) = env::var(env_key) {
            if let Some(locale) = normalize_shell_locale(&value) {
                return locale;
            }
        }
    }

    default_shell_locale
}

/// Maps a POSIX or BCP 47 locale (`zh_TW.UTF-8`, `en-GB`) onto the menu
/// languages the shell ships; the language subtag decides.
pub(crate) fn normalize_shell_locale(raw: &str) -> Option<&'static str> {
    let language = raw
        .trim()
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match language.as_str() {
        "zh" => Some("zh-CN"),
        "en" => Some("en-US"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_texts_for_locale_returns_english_copy() {
        let texts = shell_texts_for_locale("en-US");
        assert_eq!(texts.change_server_url, "Change Server URL");
        assert_eq!(texts.quit, "Quit");
        assert_eq!(texts.hard_reload, "Clear Site Data and Reload");
    }

    #[test]
    fn shell_texts_for_locale_returns_chinese_copy() {
        let texts = shell_texts_for_locale("zh-CN");
        assert_eq!(texts.menu_file, "文件");
        assert_eq!(texts.quit, "退出");
    }

    #[test]
    fn shell_texts_for_unknown_locale_fall_back_to_english() {
        assert_eq!(shell_texts_for_locale("fr-FR").reload, "Reload");
    }

    #[test]
    fn normalize_shell_locale_accepts_language_prefixes() {
        assert_eq!(normalize_shell_locale("EN_us.UTF-8"), Some("en-US"));
        assert_eq!(normalize_shell_locale("zh_TW"), Some("zh-CN"));
        assert_eq!(normalize_shell_locale("zh-CN"), Some("zh-CN"));
        assert_eq!(normalize_shell_locale("C.UTF-8"), None);
        assert_eq!(normalize_shell_locale("fr-FR"), None);
        assert_eq!(normalize_shell_locale("  "), None);
    }
}
