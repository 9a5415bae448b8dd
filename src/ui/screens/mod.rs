pub mod candles;

pub use candles::{prepare_plot, show_candles, NO_DATA_NOTICE};
