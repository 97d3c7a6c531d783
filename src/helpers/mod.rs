//! Display helpers for the presentation layer

mod date;

pub use date::*;
