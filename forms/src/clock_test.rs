use super::*;
use time::macros::date;

#[test]
fn format_date_is_iso() {
    assert_eq!(format_date(date!(2024 - 03 - 07)), "2024-03-07");
}

#[test]
fn format_month_drops_day() {
    assert_eq!(format_month(date!(2024 - 11 - 30)), "2024-11");
}

#[test]
fn parse_date_accepts_iso_and_trims() {
    assert_eq!(parse_date(" 2023-05-15 "), Some(date!(2023 - 05 - 15)));
}

#[test]
fn parse_date_rejects_garbage_and_impossible_days() {
    assert_eq!(parse_date("15/05/2023"), None);
    assert_eq!(parse_date("2023-02-30"), None);
    assert_eq!(parse_date(""), None);
}

#[test]
fn parse_month_maps_to_first_day() {
    assert_eq!(parse_month("2024-02"), Some(date!(2024 - 02 - 01)));
    assert_eq!(parse_month("2024-13"), None);
}

#[test]
fn next_day_crosses_month_and_year() {
    assert_eq!(next_day(date!(2024 - 02 - 29)), date!(2024 - 03 - 01));
    assert_eq!(next_day(date!(2023 - 12 - 31)), date!(2024 - 01 - 01));
}

#[test]
fn client_today_is_ahead_of_local_today() {
    let before = today();
    assert!(client_today() > before);
}
