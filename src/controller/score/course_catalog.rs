use std::collections::HashMap;

use ahash::RandomState;

use crate::model::{CourseSummary, Round};

/// Builds the distinct-course catalog from the round history. Rounds with
/// no usable course id are skipped; the display name and tee label stick
/// with whatever the first round for that course carried. Sorted by round
/// count, most-played first, ties in first-seen order.
#[must_use]
pub fn extract_courses(rounds: &[Round]) -> Vec<CourseSummary> {
    let mut course_order: Vec<i64> = Vec::new();
    let mut counts: HashMap<i64, usize, RandomState> = HashMap::default();
    let mut labels: HashMap<i64, (String, String), RandomState> = HashMap::default();

    for round in rounds {
        let Some(course_id) = round.course_id.filter(|id| *id != 0) else {
            continue;
        };

        if !counts.contains_key(&course_id) {
            course_order.push(course_id);
            labels.insert(
                course_id,
                (
                    display_name(round, course_id),
                    non_empty(round.tee_name.as_deref()).unwrap_or_default(),
                ),
            );
        }
        *counts.entry(course_id).or_insert(0) += 1;
    }

    let mut catalog: Vec<CourseSummary> = course_order
        .into_iter()
        .map(|course_id| {
            let (name, tee) = labels
                .remove(&course_id)
                .unwrap_or_else(|| (format!("Course {course_id}"), String::new()));
            CourseSummary {
                course_id,
                name,
                tee,
                round_count: counts.get(&course_id).copied().unwrap_or(0),
            }
        })
        .collect();

    catalog.sort_by(|a, b| b.round_count.cmp(&a.round_count));
    catalog
}

fn display_name(round: &Round, course_id: i64) -> String {
    non_empty(round.course_name.as_deref())
        .or_else(|| non_empty(round.facility_name.as_deref()))
        .unwrap_or_else(|| format!("Course {course_id}"))
}

// Blank strings fall through to the next candidate, same as absent fields.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(ToString::to_string)
}
