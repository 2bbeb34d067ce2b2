//! Styling and layout for the eligibility reports.

use std::{fmt::Display, sync::LazyLock};

use owo_colors::{OwoColorize, colors::css};

/// Checked once; piping the output to a file turns colors off.
static COLOR: LazyLock<bool> =
    LazyLock::new(|| supports_color::on(supports_color::Stream::Stdout).is_some());

/// Narrowest "needs ..." column worth printing next to a course code.
const MIN_MISSING_WIDTH: usize = 24;

/// Width of the `✓  ` / `✗  ` marker column.
const MARKER_WIDTH: usize = 3;

/// The role a piece of report text plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Prerequisites met
    Met,
    /// Prerequisites not met
    Unmet,
    /// A course name or heading worth picking out
    Course,
    /// Warnings and explanations
    Note,
}

/// Styles `text` for its tone, or leaves it plain when stdout has no color.
pub fn paint(text: impl Display, tone: Tone) -> String {
    if !*COLOR {
        return text.to_string();
    }

    match tone {
        Tone::Met => text.fg::<css::Green>().to_string(),
        Tone::Unmet => text.fg::<css::Orange>().to_string(),
        Tone::Course => text.fg::<css::LightBlue>().bold().to_string(),
        Tone::Note => text.dimmed().to_string(),
    }
}

/// Whether the eligibility table has room for the missing-prerequisites
/// column after codes of `code_width` characters.
pub fn missing_column_fits(code_width: usize) -> bool {
    let width = terminal_size::terminal_size().map(|(w, _)| usize::from(w.0));
    fits(width, code_width)
}

/// An unknown width (output is not a terminal) never truncates.
fn fits(terminal_width: Option<usize>, code_width: usize) -> bool {
    terminal_width.is_none_or(|width| {
        MARKER_WIDTH + code_width + 2 + MIN_MISSING_WIDTH <= width
    })
}
