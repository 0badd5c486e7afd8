use ghin_stats::controller::score::extract_courses;
use ghin_stats::model::{HoleResult, Round};

fn round_on(course_id: i64, course_name: Option<&str>, facility: Option<&str>) -> Round {
    Round {
        course_id: Some(course_id),
        course_name: course_name.map(ToString::to_string),
        facility_name: facility.map(ToString::to_string),
        ..Round::default()
    }
}

#[test]
fn test2_sorted_by_round_count_descending() {
    // Course 1 x3, course 2 x1, course 3 x5.
    let mut rounds = Vec::new();
    for _ in 0..3 {
        rounds.push(round_on(1, Some("Alpha"), None));
    }
    rounds.push(round_on(2, Some("Bravo"), None));
    for _ in 0..5 {
        rounds.push(round_on(3, Some("Charlie"), None));
    }

    let catalog = extract_courses(&rounds);
    let counts: Vec<usize> = catalog.iter().map(|c| c.round_count).collect();
    assert_eq!(counts, vec![5, 3, 1]);
    let ids: Vec<i64> = catalog.iter().map(|c| c.course_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test2_ties_keep_first_seen_order() {
    let rounds = vec![
        round_on(7, Some("Seventh"), None),
        round_on(4, Some("Fourth"), None),
        round_on(9, Some("Ninth"), None),
    ];

    let catalog = extract_courses(&rounds);
    let ids: Vec<i64> = catalog.iter().map(|c| c.course_id).collect();
    assert_eq!(
        ids,
        vec![7, 4, 9],
        "equal counts must stay in encounter order"
    );
}

#[test]
fn test2_name_fallback_chain() {
    // Blank course names fall through like missing ones.
    let rounds = vec![
        round_on(1, Some("Pinehurst No. 2"), Some("Pinehurst Resort")),
        round_on(2, Some(""), Some("Bethpage State Park")),
        round_on(3, None, Some("Torrey Pines")),
        round_on(4, Some(""), Some("")),
        round_on(5, None, None),
    ];

    let catalog = extract_courses(&rounds);
    let by_id = |id: i64| {
        catalog
            .iter()
            .find(|c| c.course_id == id)
            .unwrap_or_else(|| panic!("course {id} missing from catalog"))
    };

    assert_eq!(by_id(1).name, "Pinehurst No. 2");
    assert_eq!(by_id(2).name, "Bethpage State Park");
    assert_eq!(by_id(3).name, "Torrey Pines");
    assert_eq!(by_id(4).name, "Course 4");
    assert_eq!(by_id(5).name, "Course 5");
}

#[test]
fn test2_name_and_tee_stick_with_first_round_seen() {
    let mut first = round_on(1, Some("Old Name"), None);
    first.tee_name = Some("White".to_string());
    let mut second = round_on(1, Some("New Name"), None);
    second.tee_name = Some("Blue".to_string());

    let catalog = extract_courses(&[first, second]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "Old Name");
    assert_eq!(catalog[0].tee, "White");
    assert_eq!(catalog[0].round_count, 2);
}

#[test]
fn test2_missing_or_zero_course_ids_are_skipped() {
    let no_id = Round::default();
    let zero_id = Round {
        course_id: Some(0),
        ..Round::default()
    };
    let real = round_on(1, Some("Alpha"), None);

    let catalog = extract_courses(&[no_id, zero_id, real]);
    assert_eq!(catalog.len(), 1, "only the identified course survives");
    assert_eq!(catalog[0].course_id, 1);
}

#[test]
fn test2_rounds_without_hole_detail_still_count() {
    let detailed = Round {
        course_id: Some(1),
        course_name: Some("Alpha".to_string()),
        hole_details: Some(vec![HoleResult {
            hole_number: Some(1),
            par: Some(4),
            adjusted_gross_score: Some(5),
            raw_score: None,
        }]),
        ..Round::default()
    };
    let totals_only = round_on(1, Some("Alpha"), None);

    let catalog = extract_courses(&[detailed, totals_only]);
    assert_eq!(
        catalog[0].round_count, 2,
        "catalog counts rounds regardless of hole detail"
    );
}

#[test]
fn test2_missing_tee_is_empty_string() {
    let catalog = extract_courses(&[round_on(1, Some("Alpha"), None)]);
    assert_eq!(catalog[0].tee, "");
}
