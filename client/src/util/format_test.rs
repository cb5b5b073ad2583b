use super::*;

#[test]
fn format_date_time_uses_month_day_year_and_24h_clock() {
    assert_eq!(format_date_time("2024-03-01T09:05:00"), "Mar 01, 2024 09:05");
    assert_eq!(format_date_time("2024-11-20T18:45:12.123456"), "Nov 20, 2024 18:45");
}

#[test]
fn format_date_drops_time_of_day() {
    assert_eq!(format_date("2024-03-01T23:59:59"), "Mar 01, 2024");
    assert_eq!(format_date("2024-07-04"), "Jul 04, 2024");
}

#[test]
fn offsets_keep_their_wall_clock_time() {
    assert_eq!(format_date_time("2024-03-01T09:05:00+02:00"), "Mar 01, 2024 09:05");
    assert_eq!(format_date_time("2024-03-01T09:05:00Z"), "Mar 01, 2024 09:05");
}

#[test]
fn datetime_local_values_parse_without_seconds() {
    assert_eq!(format_date_time("2024-05-01T10:30"), "May 01, 2024 10:30");
}

#[test]
fn unparseable_input_is_returned_unchanged() {
    assert_eq!(format_date("next tuesday"), "next tuesday");
    assert!(parse_timestamp("").is_none());
}
