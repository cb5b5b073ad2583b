use super::*;
use crate::net::types::ContentReview;
use crate::state::submit::{SubmitError, submit};
use std::cell::Cell;

fn filled() -> PostForm {
    PostForm {
        content_text: "Fresh hoodies just landed".to_owned(),
        platforms: vec![PlatformType::Instagram],
        ..PostForm::default()
    }
}

// =============================================================
// Defaults and hashtags
// =============================================================

#[test]
fn default_form_matches_composer_defaults() {
    let form = PostForm::default();
    assert_eq!(form.user_id, 1);
    assert_eq!(form.content_tone, PostTone::Casual);
    assert!(form.platforms.is_empty());
    assert!(form.hashtags.is_empty());
}

#[test]
fn parse_hashtags_trims_and_drops_empties() {
    assert_eq!(parse_hashtags(" #a, #b ,,  ,#c"), vec!["#a", "#b", "#c"]);
    assert!(parse_hashtags("").is_empty());
}

#[test]
fn toggle_platform_adds_then_removes() {
    let mut form = PostForm::default();
    form.toggle_platform(PlatformType::Twitter);
    form.toggle_platform(PlatformType::Facebook);
    assert!(form.is_selected(PlatformType::Twitter));
    form.toggle_platform(PlatformType::Twitter);
    assert_eq!(form.platforms, vec![PlatformType::Facebook]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_content_is_rejected_before_any_network_call() {
    let mut form = filled();
    form.content_text = "   ".to_owned();
    let sent = Cell::new(false);
    let result = futures::executor::block_on(submit(form.to_request(), |_req| {
        sent.set(true);
        async { Ok::<_, crate::net::api::ApiError>(()) }
    }));
    let Err(SubmitError::Invalid(errors)) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.content_text, Some(CONTENT_REQUIRED));
    assert!(!sent.get());
}

#[test]
fn zero_platforms_block_submission() {
    let mut form = filled();
    form.platforms.clear();
    let errors = form.to_request().unwrap_err();
    assert_eq!(errors.platforms, Some("Select at least one platform"));
    assert!(errors.content_text.is_none());
}

#[test]
fn to_request_converts_optional_text_fields() {
    let mut form = filled();
    form.hashtags = "#new, #drop".to_owned();
    form.schedule_time = "2024-05-01T10:30".to_owned();
    form.call_to_action = "  ".to_owned();
    form.target_audience = "students".to_owned();
    let req = form.to_request().unwrap();
    assert_eq!(req.hashtags, vec!["#new", "#drop"]);
    assert_eq!(req.schedule_time.as_deref(), Some("2024-05-01T10:30"));
    assert!(req.call_to_action.is_none());
    assert_eq!(req.target_audience.as_deref(), Some("students"));
    assert!(req.api_ids.is_none());
}

// =============================================================
// Suggestions
// =============================================================

#[test]
fn suggestion_request_needs_content_and_defaults_platform() {
    assert!(PostForm::default().suggestion_request().is_none());

    let mut form = filled();
    form.platforms.clear();
    let req = form.suggestion_request().unwrap();
    assert_eq!(req.platform_types, vec![PlatformType::Twitter]);
    assert_eq!(req.brand_tone, PostTone::Casual);
    assert!(req.target_audience.is_none());
}

#[test]
fn applying_suggestions_comma_joins_hashtags() {
    let mut form = filled();
    form.hashtags = "#old".to_owned();
    form.apply_suggestions(&AISuggestionsResponse {
        hashtag_suggestions: vec!["#fall".to_owned(), "#streetwear".to_owned(), "#cozy".to_owned()],
        content_review: ContentReview { score: 80, suggestions: vec![] },
        optimized_content: String::new(),
    });
    assert_eq!(form.hashtags, "#fall, #streetwear, #cozy");
    assert_eq!(parse_hashtags(&form.hashtags), vec!["#fall", "#streetwear", "#cozy"]);
}

#[test]
fn best_time_request_uses_selected_platforms() {
    let req = filled().best_time_request();
    assert_eq!(req.platform_types, vec![PlatformType::Instagram]);
    assert_eq!(req.user_id, 1);
}

#[test]
fn clear_image_returns_preview_for_release() {
    let mut ui = ComposerUi {
        image_name: Some("a.png".to_owned()),
        image_preview: Some("blob:abc".to_owned()),
        ..ComposerUi::default()
    };
    assert_eq!(ui.clear_image().as_deref(), Some("blob:abc"));
    assert!(ui.image_name.is_none());
    assert!(ui.clear_image().is_none());
}
