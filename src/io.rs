//! Text input/output channels.
//!
//! The transforms only ever see strings. Where those strings come from and
//! go to is behind [`TextSource`] and [`TextSink`], so the CLI can run
//! against standard streams, the OS clipboard, or memory in tests.

use std::io::{Read, Write};
#[cfg(target_os = "linux")]
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Something text can be read from.
pub trait TextSource {
    /// Read the whole input.
    fn read_text(&mut self) -> Result<String>;
}

/// Something text can be written to.
pub trait TextSink {
    /// Write the transformed output.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// A channel that is both the input and the output of a run.
pub trait TextChannel: TextSource + TextSink {
    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Standard input and standard output.
///
/// Output is written with a trailing newline, like a shell `print`.
#[derive(Debug, Default)]
pub struct Stdio;

impl TextSource for Stdio {
    fn read_text(&mut self) -> Result<String> {
        let mut buf = String::new();
        std::io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

impl TextSink for Stdio {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}

impl TextChannel for Stdio {
    fn name(&self) -> &'static str {
        "stdio"
    }
}

/// How long a Linux clipboard write waits for a clipboard manager.
#[cfg(target_os = "linux")]
const CLIPBOARD_HANDOFF: Duration = Duration::from_secs(2);

/// The system clipboard.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Open the system clipboard.
    pub fn open() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::ClipboardUnavailable {
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard").finish_non_exhaustive()
    }
}

impl TextSource for Clipboard {
    fn read_text(&mut self) -> Result<String> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            // An empty or non-text clipboard reads as empty input.
            Err(arboard::Error::ContentNotAvailable) => {
                tracing::warn!("Clipboard holds no text, treating input as empty");
                Ok(String::new())
            }
            Err(e) => Err(Error::ClipboardUnavailable {
                reason: e.to_string(),
            }),
        }
    }
}

impl TextSink for Clipboard {
    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        // The selection is served by this process, so hold it until a
        // clipboard manager takes ownership or the handoff window closes.
        let deadline = Instant::now() + CLIPBOARD_HANDOFF;
        self.inner
            .set()
            .wait_until(deadline)
            .text(text.to_owned())
            .map_err(|e| Error::ClipboardUnavailable {
                reason: e.to_string(),
            })?;

        if Instant::now() >= deadline {
            tracing::warn!(
                "No clipboard manager took the selection within {:?}; it is cleared on exit",
                CLIPBOARD_HANDOFF
            );
        }
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| Error::ClipboardUnavailable {
                reason: e.to_string(),
            })
    }
}

impl TextChannel for Clipboard {
    fn name(&self) -> &'static str {
        "clipboard"
    }
}

/// In-memory channel: reads a fixed input and records the output.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    input: String,
    /// Last text written, if any.
    pub output: Option<String>,
}

impl Memory {
    /// Create a channel that will read `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }
}

impl TextSource for Memory {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.input.clone())
    }
}

impl TextSink for Memory {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.output = Some(text.to_string());
        Ok(())
    }
}

impl TextChannel for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }
}
