//! Output mode and writer.

use console::style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show progress lines and results.
    #[default]
    Normal,
    /// Show results only (suitable for piping).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows progress/status lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Output writer that respects output mode.
///
/// Results (reports, install guides, listings) always print; progress lines
/// are suppressed in quiet mode. Styling goes through `console`, which honors
/// `NO_COLOR` and non-TTY output on its own.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a result line unconditionally.
    pub fn println(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Write a progress line if the mode allows it.
    pub fn status(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write an emphasized progress line if the mode allows it.
    pub fn header(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", style(msg).bold());
        }
    }

    /// Write an error line to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", style(msg).red());
    }
}
