pub mod bootstrap;

pub use bootstrap::{price_line, run};
