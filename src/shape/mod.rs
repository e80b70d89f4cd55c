mod circle;
mod line;

pub use circle::*;
pub use line::*;

/// Largest vertical distance from a line at which a point still counts as on it.
pub const EPSILON: f64 = 1e-10;
