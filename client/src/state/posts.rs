//! View models for the post listing.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::types::{PostDetailResponse, PostListItem, PostListResponse, PostStatus};
use crate::util::format::{format_date, format_date_time};

pub const POSTS_LIMIT: u32 = 20;
pub const POSTS_OFFSET: u32 = 0;
pub const POSTS_FAILED: &str = "Failed to fetch posts";
pub const POST_DETAIL_FAILED: &str = "Failed to fetch post details";

/// Display-ready projection of one [`PostListItem`].
#[derive(Clone, Debug, PartialEq)]
pub struct PostCard {
    pub id: i64,
    pub content_text: String,
    pub platforms: Vec<&'static str>,
    pub status: PostStatus,
    pub schedule_label: Option<String>,
    pub created_label: String,
    pub has_image: bool,
    pub hashtags: String,
}

impl From<&PostListItem> for PostCard {
    fn from(item: &PostListItem) -> Self {
        Self {
            id: item.id,
            content_text: item.content_text.clone(),
            platforms: item.platforms.iter().map(|p| p.as_str()).collect(),
            status: item.status,
            schedule_label: item.schedule_time.as_deref().map(format_date_time),
            created_label: format_date(&item.created_at),
            has_image: item.image.is_some(),
            hashtags: item.hashtags.join(" "),
        }
    }
}

/// Cards in the order the server returned them.
pub fn post_cards(resp: &PostListResponse) -> Vec<PostCard> {
    resp.posts.iter().map(PostCard::from).collect()
}

/// CSS modifier for a status badge.
pub fn status_class(status: PostStatus) -> String {
    format!("status-badge status-badge--{}", status.as_str())
}

/// Next open detail id after clicking the toggle on `clicked`.
pub fn toggle_detail(open: Option<i64>, clicked: i64) -> Option<i64> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

/// Label/value rows for an expanded post.
pub fn detail_rows(detail: &PostDetailResponse) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Tone", detail.content_tone.label().to_owned())];
    if let Some(audience) = detail.target_audience.as_deref().filter(|s| !s.is_empty()) {
        rows.push(("Audience", audience.to_owned()));
    }
    if let Some(cta) = detail.call_to_action.as_deref().filter(|s| !s.is_empty()) {
        rows.push(("Call to action", cta.to_owned()));
    }
    if let Some(product) = &detail.product {
        rows.push(("Product", product.name.clone()));
    }
    if let Some(published) = &detail.published_at {
        rows.push(("Published", format_date_time(published)));
    }
    rows
}
