//! Post composer form state and validation.
//!
//! DESIGN
//! ======
//! The form holds raw input strings exactly as typed; conversion into a
//! [`PostSubmitRequest`] happens once, in [`PostForm::to_request`], which is
//! also the only place validation runs.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use crate::net::types::{
    AIBestTimeRequest, AISuggestionsRequest, AISuggestionsResponse, PlatformType, PostSubmitRequest, PostTone,
};

pub const DEFAULT_USER_ID: i64 = 1;

pub const CONTENT_REQUIRED: &str = "Content text is required";
pub const PLATFORM_REQUIRED: &str = "Select at least one platform";
pub const CONTENT_FIRST: &str = "Please enter some content text first";
pub const POST_SCHEDULED: &str = "Post scheduled successfully!";
pub const POST_FAILED: &str = "Failed to schedule post. Please try again.";
pub const HASHTAGS_FAILED: &str = "Failed to generate hashtags. Please try again.";
pub const BEST_TIME_FAILED: &str = "Failed to suggest a posting time";

/// Raw composer input.
#[derive(Clone, Debug, PartialEq)]
pub struct PostForm {
    pub user_id: i64,
    pub content_text: String,
    pub platforms: Vec<PlatformType>,
    pub product_id: Option<i64>,
    /// `datetime-local` value; empty when unscheduled.
    pub schedule_time: String,
    /// Comma-separated hashtags as typed.
    pub hashtags: String,
    pub target_audience: String,
    pub call_to_action: String,
    pub content_tone: PostTone,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID,
            content_text: String::new(),
            platforms: Vec::new(),
            product_id: None,
            schedule_time: String::new(),
            hashtags: String::new(),
            target_audience: String::new(),
            call_to_action: String::new(),
            content_tone: PostTone::default(),
        }
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub content_text: Option<&'static str>,
    pub platforms: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.content_text.is_none() && self.platforms.is_none()
    }
}

/// Split typed hashtags on commas, dropping blanks.
pub fn parse_hashtags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl PostForm {
    pub fn has_content(&self) -> bool {
        !self.content_text.trim().is_empty()
    }

    pub fn is_selected(&self, platform: PlatformType) -> bool {
        self.platforms.contains(&platform)
    }

    /// Add or remove `platform`, keeping selection order.
    pub fn toggle_platform(&mut self, platform: PlatformType) {
        if let Some(pos) = self.platforms.iter().position(|p| *p == platform) {
            self.platforms.remove(pos);
        } else {
            self.platforms.push(platform);
        }
    }

    pub fn validate(&self) -> FormErrors {
        FormErrors {
            content_text: (!self.has_content()).then_some(CONTENT_REQUIRED),
            platforms: self.platforms.is_empty().then_some(PLATFORM_REQUIRED),
        }
    }

    /// Validated submission payload.
    ///
    /// # Errors
    ///
    /// Returns the field errors when content is blank or no platform is selected.
    pub fn to_request(&self) -> Result<PostSubmitRequest, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(PostSubmitRequest {
            user_id: self.user_id,
            content_text: self.content_text.clone(),
            platforms: self.platforms.clone(),
            product_id: self.product_id,
            schedule_time: non_empty(&self.schedule_time),
            hashtags: parse_hashtags(&self.hashtags),
            target_audience: non_empty(&self.target_audience),
            call_to_action: non_empty(&self.call_to_action),
            content_tone: self.content_tone,
            api_ids: None,
        })
    }

    /// Hashtag suggestion request, or `None` when there is no content to analyze.
    pub fn suggestion_request(&self) -> Option<AISuggestionsRequest> {
        if !self.has_content() {
            return None;
        }
        Some(AISuggestionsRequest {
            user_id: self.user_id,
            content_text: self.content_text.clone(),
            product_category: None,
            platform_types: self.platforms_or_default(),
            target_audience: non_empty(&self.target_audience),
            brand_tone: self.content_tone,
        })
    }

    /// Replace the hashtags field with the suggested tags.
    pub fn apply_suggestions(&mut self, resp: &AISuggestionsResponse) {
        self.hashtags = resp.hashtag_suggestions.join(", ");
    }

    pub fn best_time_request(&self) -> AIBestTimeRequest {
        AIBestTimeRequest {
            user_id: self.user_id,
            platform_types: self.platforms_or_default(),
            target_audience: non_empty(&self.target_audience),
        }
    }

    fn platforms_or_default(&self) -> Vec<PlatformType> {
        if self.platforms.is_empty() {
            vec![PlatformType::Twitter]
        } else {
            self.platforms.clone()
        }
    }
}

/// Composer state that does not belong in the submitted payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposerUi {
    pub image_name: Option<String>,
    /// Object URL shown in the preview `<img>`.
    pub image_preview: Option<String>,
    pub submitting: bool,
    pub generating: bool,
    pub errors: FormErrors,
}

impl ComposerUi {
    /// Forget the chosen image, returning its preview URL so the caller can release it.
    pub fn clear_image(&mut self) -> Option<String> {
        self.image_name = None;
        self.image_preview.take()
    }
}
