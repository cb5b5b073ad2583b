use super::*;

fn summary() -> PostSummaryResponse {
    PostSummaryResponse {
        total_posts: 10,
        published_count: 4,
        scheduled_count: 3,
        failed_count: 1,
        draft_count: 2,
    }
}

#[test]
fn stat_cards_show_published_scheduled_failed_total() {
    let cards = stat_cards(&summary());
    let labels: Vec<&str> = cards.iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Published", "Scheduled", "Failed", "Total"]);
    assert_eq!(cards[3].value, 10);
}

#[test]
fn status_series_use_fixed_palette() {
    let series = status_series(&summary());
    let colors: Vec<&str> = series.iter().map(|s| s.color).collect();
    assert_eq!(colors, vec!["#10B981", "#3B82F6", "#EF4444", "#F59E0B"]);
    assert_eq!(series[3].label, "Draft");
    assert_eq!(series[3].value, 2);
}

#[test]
fn summary_filter_maps_platform_choice() {
    assert_eq!(summary_filter(""), SummaryFilter::default());
    assert_eq!(summary_filter("instagram").platform_type, Some(PlatformType::Instagram));
    assert!(summary_filter("myspace").platform_type.is_none());
}
