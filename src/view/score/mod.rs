pub mod chart;
pub mod table;
pub mod types;
pub mod utils;

pub use chart::*;
pub use table::*;
pub use types::*;
pub use utils::*;
