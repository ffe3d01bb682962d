//! Feed styling
//!
//! Verbs get a terminal palette color, secondary information (refs, titles,
//! bot accounts) is dimmed. Everything else uses the default style.

use gh_client::Actor;
use ratatui::style::{Color, Modifier, Style};

/// Palette index for each verb the feed knows about
const VERB_COLORS: [(&str, u8); 10] = [
    ("added", 4),
    ("closed", 1),
    ("commented", 9),
    ("created", 4),
    ("deleted", 1),
    ("forked", 5),
    ("opened", 2),
    ("pushed", 6),
    ("released", 4),
    ("starred", 3),
];

/// Palette color for a verb, if it has one
pub fn verb_color(verb: &str) -> Option<Color> {
    VERB_COLORS
        .iter()
        .find(|(name, _)| *name == verb)
        .map(|(_, index)| Color::Indexed(*index))
}

/// Style for a verb; unknown verbs are left unstyled
pub fn verb_style(verb: &str) -> Style {
    match verb_color(verb) {
        Some(color) => Style::new().fg(color),
        None => Style::new(),
    }
}

/// De-emphasized style for secondary information
pub fn faint() -> Style {
    Style::new().add_modifier(Modifier::DIM)
}

/// Bots are dimmed so human activity stands out
pub fn actor_style(actor: &Actor) -> Style {
    if actor.is_bot() {
        faint()
    } else {
        Style::new()
    }
}
