//! Outline geometry: segments, the builder state machine, and branch thresholds

pub mod build;
pub mod fraction;
pub mod outline;
pub mod segment;

// Re-export commonly used items
pub use build::BuildState;
pub use fraction::{gcd, Threshold};
pub use outline::{count_segments, Outline};
pub use segment::Segment;
