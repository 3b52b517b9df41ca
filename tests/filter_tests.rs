use retroboard::core::filter::{Selection, filter};
use retroboard::core::logic::Core;
use retroboard::models::feedback::{FeedbackRow, FeedbackTable};

fn sample() -> FeedbackTable {
    FeedbackTable::new(vec![
        FeedbackRow::new("t1", Some("KEEP"), Some("good")),
        FeedbackRow::new("t2", Some("Change"), Some("slow")),
        FeedbackRow::new("t3", None, Some("unlabelled")),
        FeedbackRow::new("t4", Some("keep"), None),
        FeedbackRow::new("t5", Some("Stop"), Some("meetings")),
    ])
}

#[test]
fn test_filter_all_is_identity() {
    let table = sample();
    assert_eq!(filter(&table, &Selection::All), table);
}

#[test]
fn test_filter_with_every_category_is_identity() {
    let table = sample();
    let selection = Selection::from_labels(table.categories());
    assert_eq!(filter(&table, &selection), table);
}

#[test]
fn test_filter_matches_labels_exactly() {
    let table = sample();
    let filtered = filter(&table, &Selection::from_labels(["KEEP"]));

    // "keep" is a different label even though both are KEEP bucket rows
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.rows()[0].timestamp, "t1");
}

#[test]
fn test_filter_preserves_order_and_input() {
    let table = sample();
    let before = table.clone();
    let filtered = filter(&table, &Selection::from_labels(["Stop", "Change"]));

    let stamps: Vec<&str> = filtered.iter().map(|r| r.timestamp.as_str()).collect();
    assert_eq!(stamps, vec!["t2", "t5"]);
    assert_eq!(table, before);
}

#[test]
fn test_empty_label_selects_missing_categories() {
    let filtered = filter(&sample(), &Selection::from_labels([""]));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.rows()[0].timestamp, "t3");
}

#[test]
fn test_selection_without_labels_is_all() {
    assert_eq!(Selection::from_labels(Vec::<String>::new()), Selection::All);
}

#[test]
fn test_categories_first_seen_order() {
    assert_eq!(
        sample().categories(),
        vec!["KEEP", "Change", "", "keep", "Stop"]
    );
}

#[test]
fn test_build_view_limits_recent_rows() {
    let view = Core::build_view(&sample(), &Selection::All, 2);

    assert_eq!(view.summary.total, 5);
    assert_eq!(view.summary.keep_count, 2);
    assert_eq!(view.recent.len(), 2);
    assert_eq!(view.recent.rows()[0].timestamp, "t4");
    assert_eq!(view.recent.rows()[1].timestamp, "t5");
}

#[test]
fn test_build_view_metrics_follow_filter() {
    let view = Core::build_view(&sample(), &Selection::from_labels(["Change", "Stop"]), 10);

    assert_eq!(view.summary.total, 2);
    assert_eq!(view.summary.keep_count, 0);
    assert_eq!(view.summary.other_count, 2);
    // selector still lists everything in the sheet
    assert_eq!(view.categories.len(), 5);
}
