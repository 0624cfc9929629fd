use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{DESKTOP_LOG_FILE, LOG_DIR_ENV};

pub(crate) fn default_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(LOG_DIR_ENV) {
        let path = PathBuf::from(dir.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(".flash-shell").join("logs"))
}

pub(crate) fn resolve_desktop_log_path(log_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    log_dir
        .unwrap_or_else(|| env::temp_dir().join("flash-shell"))
        .join(file_name)
}

pub(crate) fn format_log_line(category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category,
        message
    )
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

fn append_log(category: &str, message: &str) {
    let line = format_log_line(category, message);
    eprintln!("{line}");

    let path = resolve_desktop_log_path(default_log_dir(), DESKTOP_LOG_FILE);
    if let Err(error) = append_line(&path, &line) {
        eprintln!(
            "failed to append to desktop log {}: {}",
            path.display(),
            error
        );
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_log("startup", message);
}

pub(crate) fn append_plugin_log(message: &str) {
    append_log("plugin", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_prefers_given_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/logs")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/logs").join("desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert!(path.starts_with(env::temp_dir()));
        assert!(path.ends_with("desktop.log"));
    }

    #[test]
    fn format_log_line_includes_category_and_message() {
        let line = format_log_line("plugin", "flash located");
        assert!(line.ends_with("[plugin] flash located"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn append_line_creates_parent_directories() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("nested").join("desktop.log");

        append_line(&path, "first").expect("append first line");
        append_line(&path, "second").expect("append second line");

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content, "first\nsecond\n");
    }
}
