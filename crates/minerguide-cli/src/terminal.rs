//! ANSI styling for the text reports: fit headings and colored comparison deltas.

use minerguide_lib::output::Trend;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings (fit names).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for unchanged metrics.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for improvements.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for regressions.
    pub const RED: &str = "\x1b[31m";
}

/// Escape codes used by the report renderers; all empty when color is off.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Palette that always emits escape codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    /// Palette that emits nothing, for pipes and `NO_COLOR`.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            green: "",
            red: "",
        }
    }

    /// Colored or plain, depending on [`supports_color`].
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Wrap `text` in the color for a metric trend.
    pub fn trend(&self, trend: Trend, text: &str) -> String {
        let color = match trend {
            Trend::Better => self.green,
            Trend::Worse => self.red,
            Trend::Unchanged => self.gray,
        };
        format!("{color}{text}{}", self.reset)
    }

    pub fn heading(&self, text: &str) -> String {
        format!("{}{text}{}", self.white_bold, self.reset)
    }
}

/// Whether ANSI colors should be written.
///
/// Off when `NO_COLOR` is set to anything, or when `TERM` is `dumb`.
#[must_use]
pub fn supports_color() -> bool {
    let dumb_term = std::env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"));
    std::env::var_os("NO_COLOR").is_none() && !dumb_term
}

/// Whole number with comma-grouped thousands, e.g. an hourly yield.
///
/// ```
/// # use minerguide_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(950), "950");
/// assert_eq!(format_with_separators(48_211), "48,211");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
