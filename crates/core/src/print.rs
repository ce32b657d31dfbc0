//! Console formatting
//!
//! Pure ANSI styling helpers. Nothing here touches global state or writes to
//! the terminal: every function returns a `String` and callers decide whether
//! colour applies.

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;

/// Four-space indentation used for nested console output
pub const INDENT: &str = "    ";

const TASK_MARK: &str = "❲🌳❳";

/// An escape sequence pair wrapped around text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub open: &'static str,
    pub close: &'static str,
    /// Emitted instead of `close` when set
    pub replace: Option<&'static str>,
}

impl Style {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close,
            replace: None,
        }
    }

    pub const fn with_replace(
        open: &'static str,
        close: &'static str,
        replace: &'static str,
    ) -> Self {
        Self {
            open,
            close,
            replace: Some(replace),
        }
    }

    pub fn paint(&self, text: impl Display) -> String {
        format!("{}{}{}", self.open, text, self.replace.unwrap_or(self.close))
    }

    /// [`paint`](Self::paint) when `enabled`, otherwise the bare text
    pub fn paint_if(&self, enabled: bool, text: impl Display) -> String {
        if enabled {
            self.paint(text)
        } else {
            text.to_string()
        }
    }
}

pub const HUSH: Style = Style::new("\x1B[2m", "\x1B[22m");
pub const DIM: Style = HUSH;
pub const STRONG: Style = Style::with_replace("\x1B[1m", "\x1B[22m", "\x1B[22m\x1B[0m");
pub const BOLD: Style = STRONG;
pub const ITALIC: Style = Style::new("\x1B[3m", "\x1B[23m");
pub const UNDERLINE: Style = Style::new("\x1B[4m", "\x1B[24m");
pub const INVERT: Style = Style::new("\x1B[7m", "\x1B[27m");
pub const GREEN: Style = Style::new("\x1B[32m", "\x1B[39m");
pub const WHITE: Style = Style::new("\x1B[37m", "\x1B[39m");
pub const GRAY: Style = Style::new("\x1B[90m", "\x1B[39m");
pub const BLACK_BACKGROUND: Style = Style::new("\x1B[40m", "\x1B[49m");
pub const LIGHT_BLUE: Style = Style::with_replace("\x1B[104m", "\x1B[254m", "\x1B[0m");

/// Surround text with reset sequences
pub fn reset(text: impl Display) -> String {
    format!("\x1B[0m{text}\x1B[0m")
}

/// A spaced-out heading announcing a unit of work
pub fn task_heading(text: &str, colorize: bool) -> String {
    format!("\n\n{} {}\n", HUSH.paint_if(colorize, TASK_MARK), text)
}

pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Wall-clock time as `h:mm:ss.cc` followed by `AM`/`PM`
pub fn local_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let centis = (time.nanosecond() % 1_000_000_000) / 10_000_000;
    format!(
        "{}.{:02}{}",
        time.format("%-I:%M:%S"),
        centis,
        time.format("%p")
    )
}

/// Seconds with millisecond precision, e.g. `1.250`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64())
}
