//! Terminal styling for flavour listings

use owo_colors::{OwoColorize, Style};

/// Whether stdout accepts ANSI colour codes
fn supports_color() -> bool {
    supports_color::on_cached(supports_color::Stream::Stdout).is_some()
}

/// Whether the terminal is too narrow for the wide listing (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(width, _)| width.0 < 60)
}

fn paint(text: &str, style: Style) -> String {
    if supports_color() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Extension trait for styling output
pub trait Colorize {
    /// Green, for completed changes
    fn success(&self) -> String;
    /// Yellow, for no-op changes
    fn warning(&self) -> String;
    /// Cyan, for identifiers
    fn info(&self) -> String;
    /// Dimmed, for labels and secondary text
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Style::new().green())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), Style::new().yellow())
    }

    fn info(&self) -> String {
        paint(self.as_ref(), Style::new().cyan())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Style::new().dimmed())
    }
}
