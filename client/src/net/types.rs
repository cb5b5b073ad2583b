//! Wire DTOs for the scheduler REST API.
//!
//! DESIGN
//! ======
//! Field names and enum values match the backend JSON exactly; optional
//! fields are omitted on the wire rather than sent as `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Text size shown for saved designs that do not record one.
pub const DEFAULT_DESIGN_TEXT_SIZE: f64 = 24.0;
/// Text color shown for saved designs that do not record one.
pub const DEFAULT_DESIGN_TEXT_COLOR: &str = "#000000";

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_design_text_size() -> f64 {
    DEFAULT_DESIGN_TEXT_SIZE
}

fn design_text_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_DESIGN_TEXT_SIZE))
}

fn default_design_text_color() -> String {
    DEFAULT_DESIGN_TEXT_COLOR.to_owned()
}

fn design_text_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_design_text_color))
}

/// Social network a post can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
    Twitter,
    Linkedin,
    Facebook,
    Instagram,
}

impl PlatformType {
    pub const ALL: [PlatformType; 4] = [
        PlatformType::Twitter,
        PlatformType::Linkedin,
        PlatformType::Facebook,
        PlatformType::Instagram,
    ];

    /// Lowercase wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Lifecycle state of a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Pending,
    Scheduled,
    Failed,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::Failed => "failed",
        }
    }
}

/// Voice used for generated or reviewed copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostTone {
    Professional,
    #[default]
    Casual,
    Friendly,
    Formal,
    Humorous,
}

impl PostTone {
    pub const ALL: [PostTone; 5] = [
        PostTone::Professional,
        PostTone::Casual,
        PostTone::Friendly,
        PostTone::Formal,
        PostTone::Humorous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Humorous => "humorous",
        }
    }

    /// Capitalized label for select options.
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual",
            Self::Friendly => "Friendly",
            Self::Formal => "Formal",
            Self::Humorous => "Humorous",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Garment category of a customizable product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "shirt")]
    Shirt,
    #[serde(rename = "t-shirt")]
    TShirt,
    #[serde(rename = "pant")]
    Pant,
    #[serde(rename = "jacket")]
    Jacket,
    #[serde(rename = "hoodie")]
    Hoodie,
    #[serde(rename = "dress")]
    Dress,
}

/// Stored image reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: i64,
    pub path: String,
}

/// Post creation payload. Sent as multipart form fields, not JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostSubmitRequest {
    pub user_id: i64,
    pub content_text: String,
    pub platforms: Vec<PlatformType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_time: Option<String>,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    pub content_tone: PostTone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ids: Option<Vec<i64>>,
}

/// Row of the post listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostListItem {
    pub id: i64,
    pub content_text: String,
    #[serde(default)]
    pub image: Option<ImageResponse>,
    pub platforms: Vec<PlatformType>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub schedule_time: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostListItem>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Product attached to a post detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: i64,
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
}

/// Full post record returned by `GET /post/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub id: i64,
    pub user_id: i64,
    pub content_text: String,
    #[serde(default)]
    pub image: Option<ImageResponse>,
    pub platforms: Vec<PlatformType>,
    #[serde(default)]
    pub product: Option<ProductInfo>,
    #[serde(default)]
    pub schedule_time: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub call_to_action: Option<String>,
    pub content_tone: PostTone,
    pub created_at: String,
    pub modified_at: String,
}

/// Post counts by status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSummaryResponse {
    pub total_posts: i64,
    pub published_count: i64,
    pub scheduled_count: i64,
    pub failed_count: i64,
    pub draft_count: i64,
}

/// Optional filters for the post summary query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryFilter {
    pub user_id: Option<i64>,
    pub platform_type: Option<PlatformType>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiInsightResponse {
    pub insight_text: String,
}

/// Saved text-overlay placement on a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDesignCreateRequest {
    pub user_id: i64,
    pub product_id: i64,
    pub custom_text: String,
    /// Whole canvas pixels; the backend stores integer positions.
    pub text_position_x: i64,
    pub text_position_y: i64,
    pub text_size: f64,
    pub text_color: String,
}

/// A saved design as listed by the backend.
///
/// The backend may omit the size and send `null` for color and position;
/// those decode to the editor defaults so one sparse record does not fail
/// the whole list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDesignItem {
    pub id: i64,
    pub product_id: i64,
    pub custom_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text_position_x: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text_position_y: f64,
    #[serde(default = "default_design_text_size", deserialize_with = "design_text_size")]
    pub text_size: f64,
    #[serde(default = "default_design_text_color", deserialize_with = "design_text_color")]
    pub text_color: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDesignListResponse {
    pub items: Vec<ProductDesignItem>,
    pub total: i64,
}

/// Request for hashtag suggestions and a content review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AISuggestionsRequest {
    pub user_id: i64,
    pub content_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<ProductCategory>,
    pub platform_types: Vec<PlatformType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    pub brand_tone: PostTone,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentReview {
    pub score: i64,
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AISuggestionsResponse {
    pub hashtag_suggestions: Vec<String>,
    pub content_review: ContentReview,
    pub optimized_content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AIBestTimeRequest {
    pub user_id: i64,
    pub platform_types: Vec<PlatformType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AIBestTimeResponse {
    pub suggestions: Vec<String>,
}
