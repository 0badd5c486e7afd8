use std::collections::BTreeMap;

use crate::model::{HoleStat, Round};

struct HoleBucket {
    par: i32,
    strokes: Vec<i32>,
}

/// Per-hole aggregates for one course. Returns `None` when no round on the
/// course carries hole-by-hole data at all; that is the "nothing to show"
/// sentinel, distinct from `Some` of an empty vec (rounds with hole entries
/// exist but none contributed a stroke count).
///
/// Rounds without hole entries are excluded here entirely; they still count
/// in the course catalog. Par is "last wins" across contributing entries,
/// never averaged.
#[must_use]
pub fn compute_hole_stats(rounds: &[Round], course_id: i64) -> Option<Vec<HoleStat>> {
    let course_rounds: Vec<&Round> = rounds
        .iter()
        .filter(|r| r.course_id == Some(course_id) && r.has_hole_detail())
        .collect();

    if course_rounds.is_empty() {
        return None;
    }

    let mut buckets: BTreeMap<i32, HoleBucket> = BTreeMap::new();

    for round in course_rounds {
        for hole in round.holes() {
            let Some(hole_number) = hole.hole_number.filter(|n| *n != 0) else {
                continue;
            };

            let bucket = buckets.entry(hole_number).or_insert_with(|| HoleBucket {
                par: hole.par.unwrap_or(0),
                strokes: Vec::new(),
            });

            if let Some(strokes) = hole.stroke_count() {
                bucket.strokes.push(strokes);
                if let Some(par) = hole.par.filter(|p| *p != 0) {
                    bucket.par = par;
                }
            }
        }
    }

    let stats = buckets
        .into_iter()
        .filter(|(_, bucket)| !bucket.strokes.is_empty())
        .map(|(hole, bucket)| {
            let count = bucket.strokes.len();
            let mean = f64::from(bucket.strokes.iter().sum::<i32>()) / count as f64;
            let variance = bucket
                .strokes
                .iter()
                .map(|&strokes| {
                    let diff = f64::from(strokes) - mean;
                    diff * diff
                })
                .sum::<f64>()
                / count as f64;

            HoleStat {
                hole,
                par: bucket.par,
                avg: round2(mean),
                vs_par: round2(mean - f64::from(bucket.par)),
                std_dev: round2(variance.sqrt()),
                best: bucket.strokes.iter().min().copied().unwrap_or(0),
                worst: bucket.strokes.iter().max().copied().unwrap_or(0),
                rounds: count,
            }
        })
        .collect();

    Some(stats)
}

/// Standard 2-decimal rounding, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
