use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One played round as returned by the score-history endpoint. The API is
/// loose about which fields it fills in, so everything optional stays
/// optional and readers go through the accessors below.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Round {
    pub id: Option<i64>,
    pub course_id: Option<i64>,
    pub course_name: Option<String>,
    pub facility_name: Option<String>,
    pub tee_name: Option<String>,
    pub played_at: Option<NaiveDate>,
    pub hole_details: Option<Vec<HoleResult>>,
    pub hole_scores: Option<Vec<HoleResult>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HoleResult {
    pub hole_number: Option<i32>,
    pub par: Option<i32>,
    pub adjusted_gross_score: Option<i32>,
    pub raw_score: Option<i32>,
}

impl Round {
    /// The API uses `hole_details` but some responses carry `hole_scores`
    /// instead. A present-but-empty `hole_details` wins over the fallback.
    #[must_use]
    pub fn holes(&self) -> &[HoleResult] {
        match (&self.hole_details, &self.hole_scores) {
            (Some(details), _) => details,
            (None, Some(scores)) => scores,
            (None, None) => &[],
        }
    }

    #[must_use]
    pub fn has_hole_detail(&self) -> bool {
        !self.holes().is_empty()
    }
}

impl HoleResult {
    /// Strokes for the hole: the adjusted score when the API supplied one
    /// (zero included), else the raw score. `None` when neither is present.
    #[must_use]
    pub fn stroke_count(&self) -> Option<i32> {
        self.adjusted_gross_score.or(self.raw_score)
    }
}

/// One page of the score-history endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScoresPage {
    #[serde(default)]
    pub scores: Vec<Round>,
    pub total_count: Option<i64>,
}
