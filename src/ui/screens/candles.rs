use std::io::Write;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{backend::Backend, Terminal};

use crate::config::Config;
use crate::error::Result;
use crate::fetch::Candle;
use crate::ui::components::{render_candle_chart, TerminalGuard};
use crate::ui::plot::CandlePlot;

pub const NO_DATA_NOTICE: &str = "No price data available to plot.";

/// Show the candlestick chart and block until the user dismisses it.
/// Empty input prints a notice instead and never touches the terminal.
pub fn show_candles(config: &Config, candles: &[Candle]) -> Result<()> {
    let Some(plot) = prepare_plot(config, candles, &mut std::io::stdout())? else {
        return Ok(());
    };

    let mut guard = TerminalGuard::new()?;
    let outcome = run_chart_loop(guard.terminal_mut(), &plot);
    guard.restore()?;
    outcome
}

/// Build the plot model, or write the no-data notice to `out` when there are no candles.
pub fn prepare_plot<W: Write>(
    config: &Config,
    candles: &[Candle],
    out: &mut W,
) -> Result<Option<CandlePlot>> {
    match CandlePlot::build(candles, config.chart_title(), config.price_axis_label()) {
        Some(plot) => Ok(Some(plot)),
        None => {
            writeln!(out, "{NO_DATA_NOTICE}")?;
            Ok(None)
        }
    }
}

fn run_chart_loop<B: Backend>(terminal: &mut Terminal<B>, plot: &CandlePlot) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.size();
            render_candle_chart(f, area, plot);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if is_dismiss_key(&key) {
                    debug!("Chart dismissed with {:?}", key.code);
                    return Ok(());
                }
            }
        }
    }
}

fn is_dismiss_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
