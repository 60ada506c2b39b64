//! Platform-specific configuration

use thiserror::Error;

/// Command that opens a file with the user's default application
#[cfg(target_os = "macos")]
pub const OPEN_COMMAND: &str = "open";

#[cfg(target_os = "windows")]
pub const OPEN_COMMAND: &str = "explorer";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const OPEN_COMMAND: &str = "xdg-open";

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Theme toggle shortcut display
pub const THEME_SHORTCUT: &str = "Ctrl+T";

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to open {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Opens a reference document outside the TUI
#[cfg_attr(test, mockall::automock)]
pub trait DocumentOpener: Send + Sync {
    fn open(&self, path: &str) -> Result<(), OpenError>;
}

/// Opens documents with the platform's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &str) -> Result<(), OpenError> {
        std::process::Command::new(OPEN_COMMAND)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|source| OpenError::Spawn {
                path: path.to_string(),
                source,
            })
    }
}
