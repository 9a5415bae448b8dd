pub mod time;

pub use time::{day_label, local_from_epoch, tick_label};
