pub mod course;
pub mod round;
pub mod session;
pub mod stats;

pub use course::*;
pub use round::*;
pub use session::*;
pub use stats::*;
