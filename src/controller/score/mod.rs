pub mod course_catalog;
pub mod hole_stats;

pub use course_catalog::*;
pub use hole_stats::*;
