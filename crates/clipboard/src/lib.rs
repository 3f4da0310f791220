//! Clipboard operations for tallypad.
//!
//! [`ClipboardWriter`] is the seam the editor writes through.
//! [`SystemClipboard`] uses arboard; on Linux it fills both the CLIPBOARD
//! and PRIMARY selections. [`MemoryClipboard`] is an in-process stand-in.

use anyhow::{anyhow, bail, Result};
use std::cell::RefCell;
use std::rc::Rc;

use arboard::Clipboard;

#[cfg(target_os = "linux")]
use arboard::{LinuxClipboardKind, SetExtLinux};

/// Write-only access to a clipboard.
pub trait ClipboardWriter {
    /// Replace the clipboard content with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
///
/// The arboard handle is created on first use and then kept: on X11 the
/// owning handle must stay alive for other applications to read the text.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| anyhow!("Failed to open clipboard: {}", e))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| anyhow!("Clipboard unavailable"))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.clipboard.is_some())
            .finish()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self.handle()?;

        #[cfg(target_os = "linux")]
        {
            clipboard
                .set()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text(text.to_string())
                .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))?;

            // PRIMARY is best effort (middle-click paste)
            let _ = clipboard
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text.to_string());
        }

        #[cfg(not(target_os = "linux"))]
        {
            clipboard
                .set_text(text)
                .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))?;
        }

        Ok(())
    }
}

/// Clipboard kept in memory.
///
/// Clones share content, so a caller can hand one clone to the editor and
/// read back what was copied through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    content: Rc<RefCell<Option<String>>>,
    rejecting: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard that refuses every write, like a denied permission.
    pub fn rejecting() -> Self {
        Self {
            rejecting: true,
            ..Self::default()
        }
    }

    /// Last text written, if any.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.rejecting {
            bail!("Clipboard write rejected");
        }
        *self.content.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
