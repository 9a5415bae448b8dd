use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
};

use crate::ui::components::utils::chart_and_footer;
use crate::ui::plot::CandlePlot;
use crate::ui::styles::{secondary_line, title_span, AXIS};

pub const DISMISS_HINT: &str = "q / Esc / Enter close";
// Summary line plus the dismiss hint.
const FOOTER_ROWS: u16 = 2;

/// Paint the candles on a braille canvas with the summary footer underneath.
pub fn render_candle_chart(f: &mut Frame<'_>, area: Rect, plot: &CandlePlot) {
    let (chart_area, footer_area) = chart_and_footer(area, FOOTER_ROWS);

    let x_min = plot.x_bounds[0];
    let [y_min, y_max] = plot.y_bounds;
    let axis_style = Style::default().fg(AXIS);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title_span(plot.title.as_str())),
        )
        .marker(Marker::Braille)
        .x_bounds(plot.x_bounds)
        .y_bounds(plot.y_bounds)
        .paint(|ctx| {
            for segment in &plot.segments {
                ctx.draw(&CanvasLine {
                    x1: segment.x1,
                    y1: segment.y1,
                    x2: segment.x2,
                    y2: segment.y2,
                    color: segment.color,
                });
            }

            ctx.layer();
            ctx.print(
                x_min,
                y_max,
                Line::from(Span::styled(plot.y_label.clone(), axis_style)),
            );
            for (idx, label) in &plot.x_ticks {
                ctx.print(
                    *idx as f64,
                    y_min,
                    Line::from(Span::styled(label.clone(), axis_style)),
                );
            }
        });

    f.render_widget(canvas, chart_area);

    let footer = vec![
        secondary_line(plot.summary.as_str()),
        secondary_line(DISMISS_HINT),
    ];
    f.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Candle;
    use crate::utils::time::local_from_epoch;
    use ratatui::backend::TestBackend;

    fn plot() -> CandlePlot {
        let candles: Vec<Candle> = (0..6)
            .map(|day| {
                let base = 600.0 + day as f64 * 3.0;
                Candle {
                    timestamp: local_from_epoch(1_700_000_000 + day * 86_400).unwrap(),
                    open: base,
                    high: base + 8.0,
                    low: base - 6.0,
                    close: if day % 2 == 0 { base + 4.0 } else { base - 4.0 },
                }
            })
            .collect();
        CandlePlot::build(&candles, "TSMC (2330.TW)", "Price (TWD)").unwrap()
    }

    #[test]
    fn draws_title_labels_and_both_colors() {
        let plot = plot();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_candle_chart(f, area, &plot);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("TSMC (2330.TW)"));
        assert!(text.contains("Price (TWD)"));
        assert!(text.contains(&plot.x_ticks[0].1));
        assert!(text.contains("6 sessions"));
        assert!(buffer.content().iter().any(|cell| cell.fg == Color::Green));
        assert!(buffer.content().iter().any(|cell| cell.fg == Color::Red));
    }
}
