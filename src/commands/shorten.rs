//! Path shortening command implementation
//!
//! Runs each path through the display pipeline:
//! clean → abbreviate home → collapse → truncate.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

use crate::core::{collapse_with, truncate, Settings};
use crate::utils::{abbreviate_home, clean_path};

/// Renders one path for display according to `settings`.
///
/// `home` is only consulted when `settings.tilde` is set.
pub fn render(path: &str, settings: &Settings, home: Option<&str>) -> String {
    let separator = char::from(settings.separator);

    let path: Cow<'_, str> = if settings.clean {
        Cow::Owned(clean_path(path, separator))
    } else {
        Cow::Borrowed(path)
    };
    let path = match home {
        Some(home) if settings.tilde => abbreviate_home(&path, home, separator).into_owned(),
        _ => path.into_owned(),
    };

    let collapsed = collapse_with(&path, settings.separator);
    match settings.max_width {
        Some(width) => truncate(&collapsed, &settings.tail, width).into_owned(),
        None => collapsed.into_owned(),
    }
}

/// Main handler for the shorten command.
///
/// With no paths the current working directory is shortened.
pub fn handle_shorten_command(paths: Vec<String>, settings: &Settings) -> Result<()> {
    let paths = if paths.is_empty() {
        vec![current_dir_string()?]
    } else {
        paths
    };

    let home = dirs::home_dir().map(|home| home.to_string_lossy().into_owned());
    tracing::debug!(?home, count = paths.len(), "shortening paths");

    for path in &paths {
        let rendered = render(path, settings, home.as_deref());
        tracing::debug!(input = %path, output = %rendered, "shortened");
        println!("{rendered}");
    }
    Ok(())
}

/// Current directory, preferring the shell's `$PWD` so symlinked paths display as typed
fn current_dir_string() -> Result<String> {
    if let Ok(pwd) = std::env::var("PWD") {
        if Path::new(&pwd).is_absolute() {
            return Ok(pwd);
        }
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix_settings() -> Settings {
        Settings {
            separator: b'/',
            ..Settings::default()
        }
    }

    #[test]
    fn test_render_cleans_then_collapses() {
        let settings = unix_settings();
        assert_eq!(
            render("/usr//local/./share/../lib/python3/", &settings, None),
            "/u/l/l/python3"
        );
    }

    #[test]
    fn test_render_abbreviates_home() {
        let settings = unix_settings();
        assert_eq!(
            render("/home/al/projects/vainpath/src", &settings, Some("/home/al")),
            "~/p/v/src"
        );
        assert_eq!(render("/home/al", &settings, Some("/home/al")), "~");
    }

    #[test]
    fn test_render_without_tilde() {
        let settings = Settings { tilde: false, ..unix_settings() };
        assert_eq!(
            render("/home/al/projects/src", &settings, Some("/home/al")),
            "/h/a/p/src"
        );
    }

    #[test]
    fn test_render_without_clean_keeps_dots() {
        let settings = Settings { clean: false, ..unix_settings() };
        assert_eq!(render("/srv/./www/../data", &settings, None), "/s/./w/../data");
    }

    #[test]
    fn test_render_truncates_to_width() {
        let settings = Settings {
            max_width: Some(8),
            ..unix_settings()
        };
        assert_eq!(render("/var/lib/containers/storage", &settings, None), "/v/l/c/…");
        assert_eq!(render("/var/lib/x", &settings, None), "/v/l/x");
    }
}
