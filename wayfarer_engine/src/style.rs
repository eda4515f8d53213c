//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly. Color output is
//! toggled globally from configuration at startup.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn info_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bold().truecolor(240, 200, 80)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(120, 210, 120)
    }
    fn info_style(&self) -> ColoredString {
        self.truecolor(100, 200, 240)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 120, 40)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 40, 40)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn info_style(&self) -> ColoredString {
        self.as_str().info_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
