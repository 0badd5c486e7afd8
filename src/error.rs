use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Failed to initialize session: {0}")]
    SessionInit(String),
    #[error("Login failed. Please check your credentials.")]
    Auth,
    #[error("Unexpected login response format")]
    LoginResponseShape,
    #[error("API error {status}: {body}")]
    Transport { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("Sign-in canceled")]
    Canceled,
    #[error("A sign-in is already in progress")]
    InProgress,
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
