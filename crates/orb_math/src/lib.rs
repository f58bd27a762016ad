// Re-export glam for convenience
pub use glam::*;

mod interval;
pub use interval::Interval;
