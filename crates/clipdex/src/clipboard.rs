//! Clipboard I/O boundary.
//!
//! The core never touches the OS clipboard itself — it receives content
//! strings and hands them back out. [`ClipboardIo`] is that boundary:
//! [`SystemClipboard`] talks to the real clipboard through `arboard`,
//! and [`MemoryClipboard`] is an in-process double for tests and
//! headless environments.

use anyhow::Result;

/// Read/write access to the current clipboard contents.
pub trait ClipboardIo: Send {
    /// The clipboard's current text. An empty string means there is no
    /// text content to capture.
    fn read_current(&mut self) -> Result<String>;

    /// Replace the clipboard contents with `content`.
    fn write_current(&mut self, content: &str) -> Result<()>;
}

/// The OS clipboard, via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardIo for SystemClipboard {
    fn read_current(&mut self) -> Result<String> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // Non-text or empty clipboard: nothing to capture.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_current(&mut self, content: &str) -> Result<()> {
        self.inner.set_text(content.to_string())?;
        Ok(())
    }
}

/// In-memory clipboard double.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardIo for MemoryClipboard {
    fn read_current(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }

    fn write_current(&mut self, content: &str) -> Result<()> {
        self.contents = content.to_string();
        Ok(())
    }
}
