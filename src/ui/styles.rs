use std::borrow::Cow;

use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Accent color used for the chart title and key hints.
pub const ACCENT: Color = Color::Indexed(208);

/// Muted color for axis labels.
pub const AXIS: Color = Color::DarkGray;

pub fn title_span<'a>(text: impl Into<Cow<'a, str>>) -> Span<'a> {
    let owned = text.into().into_owned();
    Span::styled(owned, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
}

/// Produce a dimmed line for secondary descriptions and hints.
pub fn secondary_line<'a>(text: impl Into<Cow<'a, str>>) -> Line<'a> {
    let owned = text.into().into_owned();
    Line::from(owned.dim())
}
