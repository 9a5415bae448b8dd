pub mod components;
pub mod plot;
pub mod screens;
pub mod styles;

pub use components::TerminalGuard;
pub use plot::CandlePlot;
pub use screens::show_candles;
