//! Rendering building blocks shared by the logger and the report formatters.

mod color;

pub use color::{Color, bold, colorize, dim};
