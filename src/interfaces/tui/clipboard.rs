//! System clipboard via arboard

use crate::controller::Clipboard;
use crate::errors::{ClientError, Result};

/// The handle is kept for the whole session; on X11 the copied text is
/// only served while the owning `arboard::Clipboard` is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match &mut self.inner {
            Some(clipboard) => clipboard,
            slot => slot.insert(
                arboard::Clipboard::new().map_err(|e| ClientError::clipboard(e.to_string()))?,
            ),
        };
        clipboard
            .set_text(text)
            .map_err(|e| ClientError::clipboard(e.to_string()))
    }
}
