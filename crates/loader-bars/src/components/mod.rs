pub mod loader_bars;

pub use loader_bars::*;
