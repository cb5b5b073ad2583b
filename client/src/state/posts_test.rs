use super::*;
use crate::net::types::{ImageResponse, PlatformType, PostTone};

fn item(id: i64, text: &str) -> PostListItem {
    PostListItem {
        id,
        content_text: text.to_owned(),
        image: None,
        platforms: vec![PlatformType::Twitter],
        product_id: None,
        schedule_time: None,
        status: PostStatus::Draft,
        hashtags: vec![],
        created_at: "2024-03-01T09:00:00".to_owned(),
    }
}

fn detail() -> PostDetailResponse {
    PostDetailResponse {
        id: 5,
        user_id: 1,
        content_text: "x".to_owned(),
        image: None,
        platforms: vec![PlatformType::Facebook],
        product: None,
        schedule_time: None,
        published_at: None,
        status: PostStatus::Scheduled,
        hashtags: vec![],
        target_audience: None,
        call_to_action: None,
        content_tone: PostTone::Professional,
        created_at: "2024-03-01T09:00:00".to_owned(),
        modified_at: "2024-03-01T09:00:00".to_owned(),
    }
}

// =============================================================
// Cards
// =============================================================

#[test]
fn post_cards_preserve_server_order() {
    let resp = PostListResponse {
        posts: vec![item(9, "newest"), item(2, "older"), item(5, "middle")],
        total: 3,
        limit: 20,
        offset: 0,
    };
    let ids: Vec<i64> = post_cards(&resp).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![9, 2, 5]);
}

#[test]
fn post_card_formats_dates_hashtags_and_image_flag() {
    let mut post = item(1, "hello");
    post.schedule_time = Some("2024-05-01T10:30:00".to_owned());
    post.hashtags = vec!["#a".to_owned(), "#b".to_owned()];
    post.image = Some(ImageResponse { id: 3, path: "uploads/3.png".to_owned() });
    post.platforms = vec![PlatformType::Linkedin, PlatformType::Instagram];
    let card = PostCard::from(&post);
    assert_eq!(card.schedule_label.as_deref(), Some("May 01, 2024 10:30"));
    assert_eq!(card.created_label, "Mar 01, 2024");
    assert_eq!(card.hashtags, "#a #b");
    assert!(card.has_image);
    assert_eq!(card.platforms, vec!["linkedin", "instagram"]);
}

#[test]
fn status_class_uses_wire_value() {
    assert_eq!(status_class(PostStatus::Failed), "status-badge status-badge--failed");
}

// =============================================================
// Details
// =============================================================

#[test]
fn toggle_detail_opens_switches_and_closes() {
    assert_eq!(toggle_detail(None, 4), Some(4));
    assert_eq!(toggle_detail(Some(4), 7), Some(7));
    assert_eq!(toggle_detail(Some(7), 7), None);
}

#[test]
fn detail_rows_skip_absent_fields() {
    assert_eq!(detail_rows(&detail()), vec![("Tone", "Professional".to_owned())]);

    let mut full = detail();
    full.target_audience = Some("founders".to_owned());
    full.call_to_action = Some(String::new());
    full.published_at = Some("2024-03-02T08:15:00".to_owned());
    let rows = detail_rows(&full);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], ("Audience", "founders".to_owned()));
    assert_eq!(rows[2], ("Published", "Mar 02, 2024 08:15".to_owned()));
}
