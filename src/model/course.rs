use serde::{Deserialize, Serialize};

/// One distinct course seen in the round history, with how many rounds
/// reference it. Derived from the fetched rounds, never persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseSummary {
    pub course_id: i64,
    pub name: String,
    pub tee: String,
    pub round_count: usize,
}
