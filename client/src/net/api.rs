//! REST client for the scheduler backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] without
//! touching the network, since these endpoints only matter in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>`; views map any error onto their own
//! fixed user-facing message. There is no retry, caching, or timeout here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AIBestTimeRequest, AIBestTimeResponse, AISuggestionsRequest, AISuggestionsResponse,
    AiInsightResponse, ImageResponse, PostDetailResponse, PostListResponse, PostSubmitRequest,
    PostSummaryResponse, ProductDesignCreateRequest, ProductDesignItem, ProductDesignListResponse,
    SummaryFilter,
};
use crate::config::ApiConfig;

/// Failure modes of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Image picked in the browser and attached to a post submission.
#[cfg(feature = "hydrate")]
pub type ImageFile = web_sys::File;

/// Outside the browser there is no file handle to attach.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug)]
pub struct ImageFile;

/// Multipart fields for `POST /submit-post`, in the order the backend reads them.
///
/// The `image` part is appended separately since it is a file, not text.
pub fn submit_post_fields(req: &PostSubmitRequest) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("user_id", req.user_id.to_string()),
        ("content_text", req.content_text.clone()),
    ];
    for platform in &req.platforms {
        fields.push(("platform_list", platform.as_str().to_owned()));
    }
    if let Some(product_id) = req.product_id {
        fields.push(("product_id", product_id.to_string()));
    }
    if let Some(schedule_time) = &req.schedule_time {
        fields.push(("schedule_time", schedule_time.clone()));
    }
    fields.push(("hashtags", req.hashtags.join(",")));
    fields.push(("target_audience", req.target_audience.clone().unwrap_or_default()));
    fields.push(("call_to_action", req.call_to_action.clone().unwrap_or_default()));
    fields.push(("content_tone", req.content_tone.as_str().to_owned()));
    let api_ids = req
        .api_ids
        .as_ref()
        .map(|ids| ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(","))
        .unwrap_or_default();
    fields.push(("api_ids", api_ids));
    fields
}

/// Render `key=value` pairs as a query string, skipping absent values.
fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect();
    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

/// Typed façade over the `/api/v1` endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    root: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self { root: config.api_root() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.root)
    }

    pub fn submit_post_url(&self) -> String {
        self.url("/submit-post")
    }

    pub fn posts_url(&self, limit: u32, offset: u32) -> String {
        self.url(&format!("/posts?limit={limit}&offset={offset}"))
    }

    pub fn post_url(&self, post_id: i64) -> String {
        self.url(&format!("/post/{post_id}"))
    }

    pub fn suggest_hashtag_url(&self) -> String {
        self.url("/suggest-hashtag")
    }

    pub fn suggest_best_time_url(&self) -> String {
        self.url("/suggest-best-time")
    }

    pub fn posts_summary_url(&self, filter: &SummaryFilter) -> String {
        let query = query_string(&[
            ("user_id", filter.user_id.map(|v| v.to_string())),
            ("platform_type", filter.platform_type.map(|p| p.as_str().to_owned())),
            ("start_date", filter.start_date.clone()),
            ("end_date", filter.end_date.clone()),
        ]);
        self.url(&format!("/analytics/posts/summary{query}"))
    }

    pub fn ai_insight_url(&self, user_id: i64, query: Option<&str>) -> String {
        let query = query_string(&[
            ("user_id", Some(user_id.to_string())),
            ("query", query.map(str::to_owned)),
        ]);
        self.url(&format!("/analytics/ai-insight{query}"))
    }

    pub fn designs_url(&self) -> String {
        self.url("/product-customization/product-designs")
    }

    pub fn designs_for_user_url(&self, user_id: i64) -> String {
        format!("{}?user_id={user_id}", self.designs_url())
    }

    pub fn design_url(&self, design_id: i64) -> String {
        format!("{}/{design_id}", self.designs_url())
    }

    pub fn product_image_url(&self, product_id: i64) -> String {
        self.url(&format!("/product-customization/product-images/{product_id}"))
    }

    /// Submit a post as multipart form data via `POST /submit-post`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn submit_post(
        &self,
        req: &PostSubmitRequest,
        image: Option<&ImageFile>,
    ) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(js_transport)?;
            for (name, value) in submit_post_fields(req) {
                form.append_with_str(name, &value).map_err(js_transport)?;
            }
            if let Some(file) = image {
                form.append_with_blob_and_filename("image", file, &file.name())
                    .map_err(js_transport)?;
            }
            let resp = gloo_net::http::Request::post(&self.submit_post_url())
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (req, image);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch a page of posts via `GET /posts`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn list_posts(&self, limit: u32, offset: u32) -> Result<PostListResponse, ApiError> {
        self.get_json(&self.posts_url(limit, offset)).await
    }

    /// Fetch one post via `GET /post/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn get_post(&self, post_id: i64) -> Result<PostDetailResponse, ApiError> {
        self.get_json(&self.post_url(post_id)).await
    }

    /// Ask for hashtag suggestions via `POST /suggest-hashtag`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn suggest_hashtags(
        &self,
        req: &AISuggestionsRequest,
    ) -> Result<AISuggestionsResponse, ApiError> {
        self.post_json(&self.suggest_hashtag_url(), req).await
    }

    /// Ask for posting-time suggestions via `POST /suggest-best-time`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn suggest_best_time(
        &self,
        req: &AIBestTimeRequest,
    ) -> Result<AIBestTimeResponse, ApiError> {
        self.post_json(&self.suggest_best_time_url(), req).await
    }

    /// Fetch post counts via `GET /analytics/posts/summary`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn posts_summary(
        &self,
        filter: &SummaryFilter,
    ) -> Result<PostSummaryResponse, ApiError> {
        self.get_json(&self.posts_summary_url(filter)).await
    }

    /// Fetch a generated insight via `GET /analytics/ai-insight`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn ai_insight(
        &self,
        user_id: i64,
        query: Option<&str>,
    ) -> Result<AiInsightResponse, ApiError> {
        self.get_json(&self.ai_insight_url(user_id, query)).await
    }

    /// Save a design via `POST /product-customization/product-designs`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn create_design(
        &self,
        req: &ProductDesignCreateRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json(&self.designs_url(), req).await
    }

    /// List a user's designs.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn list_designs(&self, user_id: i64) -> Result<ProductDesignListResponse, ApiError> {
        self.get_json(&self.designs_for_user_url(user_id)).await
    }

    /// Fetch one design.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn get_design(&self, design_id: i64) -> Result<ProductDesignItem, ApiError> {
        self.get_json(&self.design_url(design_id)).await
    }

    /// Fetch the reference image for a product.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-OK status, or an undecodable body.
    pub async fn get_product_image(&self, product_id: i64) -> Result<ImageResponse, ApiError> {
        self.get_json(&self.product_image_url(product_id)).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_transport(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
