use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into the plot area and a fixed-height footer below it.
/// The plot keeps at least three rows so its border and one line of candles fit.
pub fn chart_and_footer(area: Rect, footer_height: u16) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(footer_height)])
        .split(area);
    (rows[0], rows[1])
}
