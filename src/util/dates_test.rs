use super::*;

#[test]
fn event_badge_splits_month_and_day() {
    assert_eq!(event_badge("2023-10-31"), Some(("Oct".to_owned(), 31)));
    assert_eq!(event_badge("2023-12-01"), Some(("Dec".to_owned(), 1)));
}

#[test]
fn event_badge_rejects_garbage() {
    assert_eq!(event_badge("soon"), None);
    assert_eq!(event_badge("2023-13-01"), None);
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}
