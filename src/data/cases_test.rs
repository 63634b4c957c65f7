use super::*;

fn store() -> InMemoryCases {
    InMemoryCases
}

// =============================================================
// Mock datasets
// =============================================================

#[test]
fn fetch_cases_returns_the_full_mock_set() {
    let cases = store().fetch_cases();
    assert_eq!(cases.len(), 5);
    assert!(cases.iter().all(|c| c.id.starts_with("CASE-")));
}

#[test]
fn delayed_cases_report_positive_elapsed_days() {
    let delayed = store().delayed_cases();
    assert_eq!(delayed.len(), 3);
    assert!(delayed.iter().all(|c| c.days_elapsed > 0));
}

#[test]
fn summary_is_internally_consistent() {
    let summary = store().summary();
    assert!(summary.active + summary.resolved <= summary.total);
    assert!(summary.resolution_rate <= 100);
}

#[test]
fn chart_totals_are_nonempty() {
    assert!(!store().county_totals().is_empty());
    assert!(!store().type_totals().is_empty());
}

// =============================================================
// Search
// =============================================================

#[test]
fn empty_term_matches_everything() {
    let cases = store().fetch_cases();
    assert_eq!(search(&cases, "").len(), cases.len());
}

#[test]
fn search_is_case_insensitive() {
    let cases = store().fetch_cases();
    let hits = search(&cases, "nairobi");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "CASE-001");
}

#[test]
fn search_matches_id_victim_or_county() {
    let cases = store().fetch_cases();
    assert_eq!(search(&cases, "CASE-003").len(), 1);
    assert_eq!(search(&cases, "grace").len(), 1);
    assert_eq!(search(&cases, "mombasa").len(), 1);
    assert!(search(&cases, "no such thing").is_empty());
}

#[test]
fn search_delayed_uses_the_same_rule() {
    let delayed = store().delayed_cases();
    assert_eq!(search_delayed(&delayed, "kisumu").len(), 1);
    assert_eq!(search_delayed(&delayed, "").len(), delayed.len());
    assert!(search_delayed(&delayed, "zzz").is_empty());
}

// =============================================================
// Status filter
// =============================================================

#[test]
fn by_status_none_keeps_all() {
    let cases = store().fetch_cases();
    assert_eq!(by_status(&cases, None).len(), cases.len());
}

#[test]
fn by_status_partitions_the_set() {
    let cases = store().fetch_cases();
    let new = by_status(&cases, Some(CaseStatus::New)).len();
    let in_progress = by_status(&cases, Some(CaseStatus::InProgress)).len();
    let resolved = by_status(&cases, Some(CaseStatus::Resolved)).len();
    assert_eq!(new + in_progress + resolved, cases.len());
    assert_eq!(new, 2);
    assert_eq!(resolved, 1);
}

// =============================================================
// Status labels
// =============================================================

#[test]
fn status_labels_match_display_text() {
    assert_eq!(CaseStatus::New.label(), "New");
    assert_eq!(CaseStatus::InProgress.label(), "In Progress");
    assert_eq!(CaseStatus::Resolved.label(), "Resolved");
}

#[test]
fn case_record_serializes_with_camel_case_keys() {
    let case = store().fetch_cases().remove(0);
    let json = serde_json::to_value(&case).expect("serializes");
    assert!(json.get("victimName").is_some());
    assert_eq!(json["status"], "New");
}
