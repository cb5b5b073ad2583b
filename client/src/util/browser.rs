//! Thin wrappers over browser dialogs and object URLs.
//!
//! Outside the browser these no-op (alerts are logged) so SSR stays deterministic.

use crate::net::api::ImageFile;

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                leptos::logging::warn!("alert failed: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Create a `blob:` URL previewing a picked file.
pub fn object_url(file: &ImageFile) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::Url::create_object_url_with_blob(file).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file;
        None
    }
}

/// Release a URL returned by [`object_url`].
pub fn revoke_object_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if web_sys::Url::revoke_object_url(url).is_err() {
            leptos::logging::warn!("failed to revoke preview url {url}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
