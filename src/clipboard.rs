//! Write-only clipboard access for "copy" actions

use tracing::debug;

use crate::error::AppError;

pub(crate) trait Clipboard {
    fn set(&mut self, contents: &str) -> Result<(), AppError>;
}

/// System clipboard using arboard, opened on first use.
///
/// On Linux the X11/Wayland selection lives only as long as its owner, so a
/// short-lived process has to keep serving it until another client takes it
/// over (a clipboard manager usually does so immediately).
pub(crate) struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold_selection: bool,
}

impl SystemClipboard {
    pub(crate) fn new() -> Self {
        SystemClipboard {
            inner: None,
            hold_selection: cfg!(target_os = "linux"),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set(&mut self, contents: &str) -> Result<(), AppError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let clipboard = self.inner.insert(clipboard);
        write_text(clipboard, contents, self.hold_selection)?;
        debug!(bytes = contents.len(), "copied to clipboard");
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    contents: &str,
    hold_selection: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold_selection {
        debug!("holding the selection until another client takes it");
        clipboard.set().wait().text(contents.to_string())
    } else {
        clipboard.set_text(contents.to_string())
    }
}

#[cfg(not(target_os = "linux"))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    contents: &str,
    _hold_selection: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(contents.to_string())
}

/// Copy `value` and report it on stderr so stdout stays machine-readable
pub(crate) fn copy_value(clipboard: &mut dyn Clipboard, value: &str) -> Result<(), AppError> {
    clipboard.set(value)?;
    eprintln!("Copied {value} to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        last: Option<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set(&mut self, contents: &str) -> Result<(), AppError> {
            self.last = Some(contents.to_string());
            Ok(())
        }
    }

    #[test]
    fn copy_value_writes_through() {
        let mut clipboard = RecordingClipboard::default();
        copy_value(&mut clipboard, "1699900800").unwrap();
        assert_eq!(clipboard.last.as_deref(), Some("1699900800"));
    }

    #[test]
    fn system_clipboard_holds_selection_only_on_linux() {
        let clipboard = SystemClipboard::new();
        assert_eq!(clipboard.hold_selection, cfg!(target_os = "linux"));
        assert!(clipboard.inner.is_none());
    }
}
