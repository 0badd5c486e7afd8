use serde::{Deserialize, Serialize};

/// Bearer token plus golfer profile for the active sign-in. Lives only for
/// the current session and is dropped whole on logout.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Session {
    pub token: String,
    pub golfer_id: String,
    pub golfer_name: String,
}

/// What a completed history fetch brought back.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchSummary {
    pub total_rounds: usize,
    pub with_hole_detail: usize,
}
