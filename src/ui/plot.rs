//! Geometry for the candlestick chart, kept free of terminal state so the same
//! bars always produce the same draw instructions.

use std::cmp::Ordering;

use ratatui::style::Color;

use crate::fetch::{Candle, Direction};
use crate::utils::time::{day_label, tick_label};

/// Half-width of the open/close ticks on either side of the wick.
pub const BODY_TICK_WIDTH: f64 = 0.2;
/// Roughly how many date labels to show along the x axis.
pub const TARGET_X_TICKS: usize = 6;

const TOP_PAD_RATIO: f64 = 0.05;
// Extra room under the lowest wick for the date labels row.
const BOTTOM_PAD_RATIO: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Wick,
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandlePlot {
    pub title: String,
    pub y_label: String,
    pub segments: Vec<Segment>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_ticks: Vec<(usize, String)>,
    pub summary: String,
}

pub fn direction_color(direction: Direction) -> Color {
    match direction {
        Direction::Up => Color::Green,
        Direction::Down => Color::Red,
    }
}

impl CandlePlot {
    /// Lay out one wick and two ticks per candle. `None` when there is nothing to draw.
    pub fn build(
        candles: &[Candle],
        title: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Option<Self> {
        if candles.is_empty() {
            return None;
        }

        let segments = candles
            .iter()
            .enumerate()
            .flat_map(|(idx, candle)| candle_segments(idx as f64, candle))
            .collect();

        Some(Self {
            title: title.into(),
            y_label: y_label.into(),
            segments,
            x_bounds: [-1.0, candles.len() as f64],
            y_bounds: price_bounds(candles),
            x_ticks: date_ticks(candles),
            summary: summarize(candles),
        })
    }
}

fn candle_segments(x: f64, candle: &Candle) -> [Segment; 3] {
    let color = direction_color(candle.direction());
    [
        Segment {
            kind: SegmentKind::Wick,
            x1: x,
            y1: candle.low,
            x2: x,
            y2: candle.high,
            color,
        },
        Segment {
            kind: SegmentKind::Open,
            x1: x - BODY_TICK_WIDTH,
            y1: candle.open,
            x2: x,
            y2: candle.open,
            color,
        },
        Segment {
            kind: SegmentKind::Close,
            x1: x,
            y1: candle.close,
            x2: x + BODY_TICK_WIDTH,
            y2: candle.close,
            color,
        },
    ]
}

pub fn tick_step(len: usize) -> usize {
    (len / TARGET_X_TICKS).max(1)
}

pub fn date_ticks(candles: &[Candle]) -> Vec<(usize, String)> {
    (0..candles.len())
        .step_by(tick_step(candles.len()))
        .map(|idx| (idx, tick_label(&candles[idx].timestamp)))
        .collect()
}

// Upstream bars are not guaranteed to satisfy low <= open/close <= high.
fn price_bounds(candles: &[Candle]) -> [f64; 2] {
    let prices = || {
        candles
            .iter()
            .flat_map(|c| [c.open, c.high, c.low, c.close])
    };
    let low = prices().fold(f64::INFINITY, f64::min);
    let high = prices().fold(f64::NEG_INFINITY, f64::max);

    let mut span = high - low;
    if span.abs() < 1e-6 {
        span = if low.abs() < 1.0 { 1.0 } else { low.abs() * 0.05 };
    }

    [low - span * BOTTOM_PAD_RATIO, high + span * TOP_PAD_RATIO]
}

fn summarize(candles: &[Candle]) -> String {
    let first = &candles[0];
    let last = &candles[candles.len() - 1];

    let mut highest = first;
    let mut lowest = first;
    for candle in &candles[1..] {
        if candle
            .high
            .partial_cmp(&highest.high)
            .unwrap_or(Ordering::Equal)
            == Ordering::Greater
        {
            highest = candle;
        }
        if candle
            .low
            .partial_cmp(&lowest.low)
            .unwrap_or(Ordering::Equal)
            == Ordering::Less
        {
            lowest = candle;
        }
    }

    format!(
        "{} sessions • {} -> {} • High {:.2} on {} • Low {:.2} on {}",
        candles.len(),
        day_label(&first.timestamp),
        day_label(&last.timestamp),
        highest.high,
        day_label(&highest.timestamp),
        lowest.low,
        day_label(&lowest.timestamp),
    )
}
