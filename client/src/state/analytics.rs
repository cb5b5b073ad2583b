//! Analytics dashboard data shaping.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::types::{PlatformType, PostSummaryResponse, SummaryFilter};
use crate::util::chart_math::Series;

pub const ANALYTICS_FAILED: &str = "Failed to fetch analytics";
pub const INSIGHT_FAILED: &str = "Failed to generate insight";
pub const INSIGHT_USER_ID: i64 = 1;
pub const INSIGHT_QUERY: &str = "Generate insights about my social media posting performance";

pub const PUBLISHED_COLOR: &str = "#10B981";
pub const SCHEDULED_COLOR: &str = "#3B82F6";
pub const FAILED_COLOR: &str = "#EF4444";
pub const DRAFT_COLOR: &str = "#F59E0B";

pub const PERFORMANCE_TIPS: [&str; 4] = [
    "Post consistently during peak hours for better engagement",
    "Use relevant hashtags to increase post visibility",
    "Include compelling images to boost engagement rates",
    "Monitor failed posts and adjust your strategy",
];

/// Headline count card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: i64,
    /// BEM modifier for the card accent.
    pub accent: &'static str,
}

pub fn stat_cards(summary: &PostSummaryResponse) -> [StatCard; 4] {
    [
        StatCard { label: "Published", value: summary.published_count, accent: "published" },
        StatCard { label: "Scheduled", value: summary.scheduled_count, accent: "scheduled" },
        StatCard { label: "Failed", value: summary.failed_count, accent: "failed" },
        StatCard { label: "Total", value: summary.total_posts, accent: "total" },
    ]
}

/// Chart series in legend order.
pub fn status_series(summary: &PostSummaryResponse) -> [Series; 4] {
    [
        Series { label: "Published", value: summary.published_count, color: PUBLISHED_COLOR },
        Series { label: "Scheduled", value: summary.scheduled_count, color: SCHEDULED_COLOR },
        Series { label: "Failed", value: summary.failed_count, color: FAILED_COLOR },
        Series { label: "Draft", value: summary.draft_count, color: DRAFT_COLOR },
    ]
}

/// Summary query for the platform picker; `""` means all platforms.
pub fn summary_filter(platform: &str) -> SummaryFilter {
    SummaryFilter {
        platform_type: PlatformType::parse(platform),
        ..SummaryFilter::default()
    }
}
