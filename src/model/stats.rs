use serde::{Deserialize, Serialize};

/// Aggregates for one hole across every contributing round on a course.
/// `par` is the last non-zero par observed among contributing entries, not
/// an average. `avg`, `vs_par`, and `std_dev` are rounded to 2 decimals.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleStat {
    pub hole: i32,
    pub par: i32,
    pub avg: f64,
    pub vs_par: f64,
    pub std_dev: f64,
    pub best: i32,
    pub worst: i32,
    pub rounds: usize,
}
