pub mod auth;
pub mod client;
pub mod scores;

pub use auth::*;
pub use client::*;
pub use scores::*;
