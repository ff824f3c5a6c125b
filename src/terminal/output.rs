//! Terminal output utilities.
//!
//! Box drawing and strength colouring. Everything writes to a caller-supplied
//! writer so the shell can run against any stream.

use std::io::{self, Write};

use crossterm::execute;
use crossterm::style::{Color, ResetColor, Stylize};

use crate::pass::{Strength, StrengthCategory};

// ============================================================================
// Terminal Control
// ============================================================================

/// Drop any colour left active by an interrupted write.
pub fn reset_terminal() {
    let _ = execute!(io::stdout(), ResetColor);
}

// ============================================================================
// Strength Colours
// ============================================================================

pub fn strength_color(category: StrengthCategory) -> Color {
    match category {
        StrengthCategory::Weak => Color::DarkRed,
        StrengthCategory::Moderate => Color::DarkYellow,
        StrengthCategory::Strong => Color::DarkGreen,
        StrengthCategory::VeryStrong => Color::DarkCyan,
    }
}

/// Categories in their colour, scores as plain numbers.
pub fn styled_strength(strength: Strength) -> String {
    match strength {
        Strength::Category(c) => c.label().with(strength_color(c)).to_string(),
        Strength::Score(n) => n.to_string(),
    }
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                           │
///
/// Content wider than the box is written unpadded rather than cut.
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

/// └───────────────────────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
