//! Diagnostics on stderr: errors, warnings and informational notices.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`.
//! Notices raised by dashboard state changes print as `ℹ Title: description`.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

/// Stderr writer with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a writer honoring an explicit color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    /// Creates a writer that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org/: presence of the variable disables color
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error_with_detail(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, None, None);
    }

    pub fn print_info(&self, title: &str, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, title, message);
    }

    /// Writes an error to `w`. Write failures are ignored: there is nowhere
    /// left to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let _ = writeln!(
            w,
            "{}{message}",
            self.heading("✖", error_type, ansi::RED)
        );
        self.write_trailer(w, detail, suggestion);
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let _ = writeln!(
            w,
            "{}{message}",
            self.heading("⚠", "Warning", ansi::YELLOW)
        );
        self.write_trailer(w, detail, suggestion);
    }

    pub fn write_info<W: Write>(&self, w: &mut W, title: &str, message: &str) {
        let _ = writeln!(w, "{}{message}", self.heading("ℹ", title, ansi::BLUE));
    }

    fn heading(&self, icon: &str, label: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{color}{icon} {label}:{} ", ansi::BOLD, ansi::RESET)
        } else {
            format!("{icon} {label}: ")
        }
    }

    fn write_trailer<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error with detail and suggestion using auto-detected colors.
pub fn print_error_full(
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    ErrorOutput::stderr().print_error_with_detail(error_type, message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
