pub mod args;
pub mod error;
pub mod model;
pub mod session;
pub mod controller {
    pub mod ghin;
    pub mod score;
}
pub mod view {
    pub mod score;
}

pub use error::CoreError;
pub use session::SessionManager;
