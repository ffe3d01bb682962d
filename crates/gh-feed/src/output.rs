//! Terminal output
//!
//! Writes rendered lines either as plain text or with ANSI escape sequences.

use gh_feed_config::ColorMode;
use ratatui::crossterm::{
    queue,
    style::{Attribute, Color as TermColor, Print, SetAttribute, SetForegroundColor},
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::io::{self, Write};

/// Whether output should carry ANSI styling
pub fn should_style(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal,
    }
}

fn term_color(color: Color) -> Option<TermColor> {
    match color {
        Color::Indexed(index) => Some(TermColor::AnsiValue(index)),
        Color::Reset => Some(TermColor::Reset),
        _ => None,
    }
}

fn write_span<W: Write>(w: &mut W, span: &Span<'_>) -> io::Result<()> {
    if let Some(color) = span.style.fg.and_then(term_color) {
        queue!(w, SetForegroundColor(color))?;
    }
    if span.style.add_modifier.contains(Modifier::DIM) {
        queue!(w, SetAttribute(Attribute::Dim))?;
    }
    queue!(w, Print(&span.content), SetAttribute(Attribute::Reset))
}

/// Write one line followed by a newline
pub fn write_line<W: Write>(w: &mut W, line: &Line<'_>, styled: bool) -> io::Result<()> {
    for span in &line.spans {
        if styled && span.style != Style::default() {
            write_span(w, span)?;
        } else {
            w.write_all(span.content.as_bytes())?;
        }
    }
    writeln!(w)
}
